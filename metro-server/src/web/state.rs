//! Application state for the web layer.

use std::sync::Arc;

use crate::schedule::ScheduleService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Next-metro query service
    pub schedule: Arc<ScheduleService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedule: ScheduleService) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }
}
