//! Time-of-day handling for the schedule engine.
//!
//! Simulated times arrive as "HH:MM" strings. Internally a time is the number
//! of minutes since midnight, and arithmetic wraps at midnight: the service
//! day is modelled as a single 24-hour dial.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day, stored as minutes since midnight in `[0, 1439]`.
///
/// # Examples
///
/// ```
/// use metro_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("23:58").unwrap();
/// assert_eq!(t.minutes(), 23 * 60 + 58);
///
/// // Adding minutes wraps past midnight
/// assert_eq!(t.add_minutes(3).to_string(), "00:01");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, 00:00.
    pub const MIDNIGHT: Self = Self(0);

    /// Build a time from hour and minute components.
    ///
    /// Intended for constants.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= 24` or `minute >= 60`.
    pub const fn at(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "time components out of range");
        Self(hour * 60 + minute)
    }

    /// Build a time from hour and minute components, rejecting out-of-range values.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self(hour * 60 + minute))
    }

    /// Build a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Truncate a wall-clock time to the minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        // hour() < 24 and minute() < 60 by construction
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// Each component is one or two ASCII digits, so "9:05" is accepted
    /// alongside "09:05".
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("9:05").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("0905").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        let hour =
            parse_digits(hours.as_bytes()).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_digits(minutes.as_bytes())
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(Self(hour * 60 + minute))
    }

    /// Returns minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add minutes to this time, wrapping past midnight.
    pub fn add_minutes(self, minutes: u32) -> Self {
        let wrapped = (u32::from(self.0) + minutes % u32::from(MINUTES_PER_DAY))
            % u32::from(MINUTES_PER_DAY);
        Self(wrapped as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse one or two ASCII digit bytes.
fn parse_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.is_empty() || bytes.len() > 2 {
        return None;
    }
    bytes.iter().try_fold(0u16, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit as u16)
    })
}
