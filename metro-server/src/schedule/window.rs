//! Daily service window.

use crate::domain::TimeOfDay;

/// The daily operating window, which wraps past midnight.
///
/// Service opens at `start` in the morning and runs through midnight until
/// `end` the following early morning. The last-train period is the tail
/// `[last_window_start, end]`.
///
/// # Examples
///
/// ```
/// use metro_server::domain::TimeOfDay;
/// use metro_server::schedule::ServiceWindow;
///
/// let window = ServiceWindow::new(
///     TimeOfDay::at(5, 30),
///     TimeOfDay::at(1, 15),
///     TimeOfDay::at(0, 45),
/// );
///
/// assert!(window.is_open(TimeOfDay::at(23, 58)));
/// assert!(!window.is_open(TimeOfDay::at(1, 20)));
/// assert!(window.is_last_period(TimeOfDay::at(0, 50)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    start: TimeOfDay,
    end: TimeOfDay,
    last_window_start: TimeOfDay,
}

impl ServiceWindow {
    /// Create a window from its three bounds.
    pub fn new(start: TimeOfDay, end: TimeOfDay, last_window_start: TimeOfDay) -> Self {
        Self {
            start,
            end,
            last_window_start,
        }
    }

    /// First train of the day.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// End of service, after midnight.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Start of the last-train period.
    pub fn last_window_start(&self) -> TimeOfDay {
        self.last_window_start
    }

    /// Whether trains run at `t`. Both bounds are inclusive.
    pub fn is_open(&self, t: TimeOfDay) -> bool {
        t >= self.start || t <= self.end
    }

    /// Whether `t` falls in the last-train period. Both bounds are inclusive.
    pub fn is_last_period(&self, t: TimeOfDay) -> bool {
        self.last_window_start <= t && t <= self.end
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_time() -> impl Strategy<Value = TimeOfDay> {
        (0u16..1440).prop_map(|m| TimeOfDay::from_minutes(m).unwrap())
    }

    fn any_window() -> impl Strategy<Value = ServiceWindow> {
        // end in the early morning, last window start at or before it
        (0u16..330, 0u16..330).prop_map(|(a, b)| {
            let (last, end) = if a <= b { (a, b) } else { (b, a) };
            ServiceWindow::new(
                TimeOfDay::at(5, 30),
                TimeOfDay::from_minutes(end).unwrap(),
                TimeOfDay::from_minutes(last).unwrap(),
            )
        })
    }

    proptest! {
        /// Identical inputs always give identical answers
        #[test]
        fn deterministic(w in any_window(), t in any_time()) {
            prop_assert_eq!(w.is_open(t), w.is_open(t));
            prop_assert_eq!(w.is_last_period(t), w.is_last_period(t));
        }

        /// The last-train period lies inside the open window
        #[test]
        fn last_period_implies_open(w in any_window(), t in any_time()) {
            if w.is_last_period(t) {
                prop_assert!(w.is_open(t));
            }
        }

        /// Open matches the wraparound definition
        #[test]
        fn open_matches_definition(w in any_window(), t in any_time()) {
            let m = t.minutes();
            let expected = m >= w.start().minutes() || m <= w.end().minutes();
            prop_assert_eq!(w.is_open(t), expected);
        }
    }
}
