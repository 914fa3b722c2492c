//! Arrival types.

use std::fmt;

use super::TimeOfDay;

/// A predicted arrival at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// When the train arrives.
    pub time: TimeOfDay,

    /// Whether this arrival falls in the last-train period.
    pub is_last: bool,
}

/// Error returned when an arrival count is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("n must be between {} and {}", ArrivalCount::MIN, ArrivalCount::MAX)]
pub struct InvalidArrivalCount;

/// Number of arrivals requested in a single query, always in `[1, 5]`.
///
/// # Examples
///
/// ```
/// use metro_server::domain::ArrivalCount;
///
/// assert_eq!(ArrivalCount::new(3).unwrap().get(), 3);
/// assert!(ArrivalCount::new(0).is_err());
/// assert!(ArrivalCount::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrivalCount(u8);

impl ArrivalCount {
    /// Smallest count a caller may request.
    pub const MIN: u8 = 1;

    /// Largest count a caller may request.
    pub const MAX: u8 = 5;

    /// A single arrival, the default when no count is given.
    pub const ONE: Self = Self(1);

    /// Validate a requested count.
    pub fn new(n: i64) -> Result<Self, InvalidArrivalCount> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(InvalidArrivalCount)
        }
    }

    /// Parse a count from a query-string value.
    pub fn parse(s: &str) -> Result<Self, InvalidArrivalCount> {
        let n: i64 = s.trim().parse().map_err(|_| InvalidArrivalCount)?;
        Self::new(n)
    }

    /// Returns the count.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Whether exactly one arrival was requested.
    pub fn is_single(self) -> bool {
        self.0 == 1
    }
}

impl Default for ArrivalCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ArrivalCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
