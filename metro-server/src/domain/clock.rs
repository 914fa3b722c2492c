//! Wall clock access and simulated-time normalization.

use chrono::Utc;
use chrono_tz::Europe::Paris;
use tracing::debug;

use super::TimeOfDay;

/// Source of the current time of day.
///
/// Implemented for any `Fn() -> TimeOfDay`, so tests can pass a closure
/// returning a fixed time.
pub trait Clock: Send + Sync {
    /// Returns the current time of day, truncated to the minute.
    fn now(&self) -> TimeOfDay;
}

impl<F> Clock for F
where
    F: Fn() -> TimeOfDay + Send + Sync,
{
    fn now(&self) -> TimeOfDay {
        self()
    }
}

/// The real wall clock, read in the Paris time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParisClock;

impl Clock for ParisClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_naive_time(Utc::now().with_timezone(&Paris).time())
    }
}

/// Resolve the time a query should be answered for.
///
/// A well-formed simulated "HH:MM" wins. Anything else, including a
/// malformed simulated time, falls back to the clock without error.
pub fn normalize<C: Clock + ?Sized>(simulated: Option<&str>, clock: &C) -> TimeOfDay {
    if let Some(raw) = simulated {
        match TimeOfDay::parse_hhmm(raw) {
            Ok(time) => {
                debug!(%time, "using simulated time");
                return time;
            }
            Err(e) => debug!(simulated = raw, error = %e, "ignoring simulated time"),
        }
    }
    clock.now()
}
