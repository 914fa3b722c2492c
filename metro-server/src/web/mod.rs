//! Web layer for the next-metro service.
//!
//! Validates request parameters, calls the schedule service and maps its
//! outcomes to HTTP statuses.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
