//! Arrival generation from a fixed headway.
//!
//! Trains are assumed to run every `headway` minutes starting one headway
//! after the base time. The multi-arrival generator stops at the first
//! candidate that falls outside the service window, so it may return fewer
//! arrivals than requested. The single-arrival generator never truncates.

use std::iter;

use tracing::debug;

use super::ServiceWindow;
use crate::domain::{Arrival, TimeOfDay};

/// The next arrival one headway after `base`.
///
/// No window check is applied: a caller that asks for one arrival always
/// gets one, even when it falls after service end.
pub fn next_arrival(base: TimeOfDay, headway_mins: u32) -> TimeOfDay {
    base.add_minutes(headway_mins)
}

/// Up to `n` arrivals spaced by `headway_mins` after `base`.
///
/// Each arrival's `is_last` flag is evaluated at the arrival's own time.
/// Generation stops at the first arrival outside the service window.
///
/// # Examples
///
/// ```
/// use metro_server::domain::TimeOfDay;
/// use metro_server::schedule::{ServiceWindow, next_arrivals};
///
/// let window = ServiceWindow::new(
///     TimeOfDay::at(5, 30),
///     TimeOfDay::at(1, 15),
///     TimeOfDay::at(0, 45),
/// );
///
/// // Only two trains left before service ends at 01:15
/// let arrivals = next_arrivals(TimeOfDay::at(1, 8), 3, 3, &window);
/// assert_eq!(arrivals.len(), 2);
/// assert_eq!(arrivals[1].time.to_string(), "01:14");
/// ```
pub fn next_arrivals(
    base: TimeOfDay,
    n: usize,
    headway_mins: u32,
    window: &ServiceWindow,
) -> Vec<Arrival> {
    let arrivals: Vec<Arrival> = iter::successors(Some(next_arrival(base, headway_mins)), |t| {
        Some(next_arrival(*t, headway_mins))
    })
    .take(n)
    .take_while(|t| window.is_open(*t))
    .map(|time| Arrival {
        time,
        is_last: window.is_last_period(time),
    })
    .collect();

    if arrivals.len() < n {
        debug!(
            %base,
            requested = n,
            generated = arrivals.len(),
            "service window closes before all arrivals"
        );
    }

    arrivals
}
