//! Domain types for the next-metro service.
//!
//! Types here enforce their invariants at construction time: a `TimeOfDay`
//! is always within a day and an `ArrivalCount` is always in range, so code
//! that receives them does not re-validate.

mod arrival;
mod clock;
mod time;

pub use arrival::{Arrival, ArrivalCount, InvalidArrivalCount};
pub use clock::{Clock, ParisClock, normalize};
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay};
