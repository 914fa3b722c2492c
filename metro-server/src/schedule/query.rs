//! Next-metro query.
//!
//! Composes clock normalization, the service window, the arrival generator
//! and the station directory into the one operation the web layer calls.

use std::sync::Arc;

use tracing::debug;

use super::{ServiceWindow, next_arrival, next_arrivals};
use crate::config::Config;
use crate::domain::{Arrival, ArrivalCount, Clock, TimeOfDay, normalize};
use crate::stations::{Line, StationDirectory};

/// Time zone reported with every schedule.
pub const TIMEZONE: &str = "Europe/Paris";

/// Reasons a query yields no schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Station is not in the directory
    #[error("unknown station")]
    UnknownStation { suggestions: Vec<String> },

    /// Station is valid but no trains run at the query time
    #[error("service closed")]
    ServiceClosed,
}

/// Upcoming trains, in the shape requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departures {
    /// One arrival requested. `is_last` is evaluated at the query time.
    Next { arrival: TimeOfDay, is_last: bool },

    /// Several arrivals requested, each flagged at its own time. May be
    /// shorter than requested when service ends first.
    Upcoming(Vec<Arrival>),
}

/// Schedule for a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub station: String,
    pub line: Line,
    pub headway_mins: u32,
    pub tz: &'static str,
    pub departures: Departures,
}

/// Answers next-metro queries against fixed configuration.
///
/// Configuration, directory and clock are captured at construction and
/// only read afterwards, so one instance can serve concurrent requests.
pub struct ScheduleService {
    headway_mins: u32,
    window: ServiceWindow,
    directory: StationDirectory,
    clock: Arc<dyn Clock>,
}

impl ScheduleService {
    /// Create a service.
    pub fn new(config: &Config, directory: StationDirectory, clock: impl Clock + 'static) -> Self {
        Self {
            headway_mins: config.headway_mins,
            window: config.service_window(),
            directory,
            clock: Arc::new(clock),
        }
    }

    /// Minutes between trains.
    pub fn headway_mins(&self) -> u32 {
        self.headway_mins
    }

    /// The daily service window.
    pub fn window(&self) -> &ServiceWindow {
        &self.window
    }

    /// The station directory.
    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    /// Compute upcoming arrivals at `station`.
    ///
    /// `simulated` overrides the clock when it is a valid "HH:MM" time and is
    /// ignored otherwise.
    pub fn query(
        &self,
        station: &str,
        simulated: Option<&str>,
        count: ArrivalCount,
    ) -> Result<ScheduleResult, QueryError> {
        let now = normalize(simulated, self.clock.as_ref());

        if !self.directory.is_known(station) {
            let suggestions = self
                .directory
                .suggest(station)
                .into_iter()
                .map(String::from)
                .collect();
            return Err(QueryError::UnknownStation { suggestions });
        }

        if !self.window.is_open(now) {
            debug!(station, %now, "service closed");
            return Err(QueryError::ServiceClosed);
        }

        let departures = if count.is_single() {
            Departures::Next {
                arrival: next_arrival(now, self.headway_mins),
                is_last: self.window.is_last_period(now),
            }
        } else {
            Departures::Upcoming(next_arrivals(
                now,
                count.get(),
                self.headway_mins,
                &self.window,
            ))
        };

        debug!(station, %now, %count, ?departures, "computed schedule");

        Ok(ScheduleResult {
            station: station.to_string(),
            line: self.directory.line_for(station),
            headway_mins: self.headway_mins,
            tz: TIMEZONE,
            departures,
        })
    }
}
