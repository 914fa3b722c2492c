//! Schedule computation.
//!
//! The service window decides whether trains run at a given time; the
//! arrival generator spaces trains by the configured headway; the query
//! service ties both to the station directory.

mod arrivals;
mod query;
mod window;

pub use arrivals::{next_arrival, next_arrivals};
pub use query::{Departures, QueryError, ScheduleResult, ScheduleService, TIMEZONE};
pub use window::ServiceWindow;
