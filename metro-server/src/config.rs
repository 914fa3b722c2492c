//! Process configuration.
//!
//! Read once from the environment at startup and never mutated afterwards.

use crate::domain::{TimeError, TimeOfDay};
use crate::schedule::ServiceWindow;

/// First train of the day. Not configurable.
pub const SERVICE_START: TimeOfDay = TimeOfDay::at(5, 30);

/// Environment variable holding the headway in minutes.
pub const HEADWAY_VAR: &str = "HEADWAY_MIN";

/// Environment variable holding the start of the last-train period.
pub const LAST_WINDOW_START_VAR: &str = "LAST_WINDOW_START";

/// Environment variable holding the end of service.
pub const SERVICE_END_VAR: &str = "SERVICE_END";

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Headway is not a positive integer
    #[error("{} must be a positive integer, got {value:?}", HEADWAY_VAR)]
    InvalidHeadway { value: String },

    /// A time variable is not "HH:MM"
    #[error("{var} is not a valid HH:MM time ({value:?}): {source}")]
    InvalidTime {
        var: &'static str,
        value: String,
        source: TimeError,
    },

    /// Port is not a valid TCP port
    #[error("{} must be a port number, got {value:?}", PORT_VAR)]
    InvalidPort { value: String },

    /// Service end does not fall in the early morning before service start
    #[error("service end {end} must be before service start {}", SERVICE_START)]
    ServiceEndAfterStart { end: TimeOfDay },

    /// Last-train period starts after service ends
    #[error("last window start {start} must not be after service end {end}")]
    LastWindowAfterEnd { start: TimeOfDay, end: TimeOfDay },
}

/// Schedule and listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minutes between consecutive trains. Always positive.
    pub headway_mins: u32,

    /// End of service, in the early morning after midnight.
    pub service_end: TimeOfDay,

    /// Start of the last-train period.
    pub last_window_start: TimeOfDay,

    /// HTTP listen port.
    pub port: u16,
}

impl Config {
    /// Create a configuration, checking the window bounds.
    pub fn new(
        headway_mins: u32,
        service_end: TimeOfDay,
        last_window_start: TimeOfDay,
        port: u16,
    ) -> Result<Self, ConfigError> {
        if headway_mins == 0 {
            return Err(ConfigError::InvalidHeadway {
                value: headway_mins.to_string(),
            });
        }
        if service_end >= SERVICE_START {
            return Err(ConfigError::ServiceEndAfterStart { end: service_end });
        }
        if last_window_start > service_end {
            return Err(ConfigError::LastWindowAfterEnd {
                start: last_window_start,
                end: service_end,
            });
        }

        Ok(Self {
            headway_mins,
            service_end,
            last_window_start,
            port,
        })
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing or empty values take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let headway_mins = match get(HEADWAY_VAR) {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&h| h > 0)
                .ok_or(ConfigError::InvalidHeadway { value })?,
            None => defaults.headway_mins,
        };

        let service_end = match get(SERVICE_END_VAR) {
            Some(value) => parse_time(SERVICE_END_VAR, value)?,
            None => defaults.service_end,
        };

        let last_window_start = match get(LAST_WINDOW_START_VAR) {
            Some(value) => parse_time(LAST_WINDOW_START_VAR, value)?,
            None => defaults.last_window_start,
        };

        let port = match get(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => defaults.port,
        };

        Self::new(headway_mins, service_end, last_window_start, port)
    }

    /// The service window described by this configuration.
    pub fn service_window(&self) -> ServiceWindow {
        ServiceWindow::new(SERVICE_START, self.service_end, self.last_window_start)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headway_mins: 3,
            service_end: TimeOfDay::at(1, 15),
            last_window_start: TimeOfDay::at(0, 45),
            port: 3000,
        }
    }
}

fn parse_time(var: &'static str, value: String) -> Result<TimeOfDay, ConfigError> {
    TimeOfDay::parse_hhmm(value.trim())
        .map_err(|source| ConfigError::InvalidTime { var, value, source })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.headway_mins, 3);
        assert_eq!(config.service_end, TimeOfDay::at(1, 15));
        assert_eq!(config.last_window_start, TimeOfDay::at(0, 45));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn blank_values_give_defaults() {
        let config = load(&[(HEADWAY_VAR, ""), (SERVICE_END_VAR, "  ")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn custom_values() {
        let config = load(&[
            (HEADWAY_VAR, "5"),
            (SERVICE_END_VAR, "02:00"),
            (LAST_WINDOW_START_VAR, "01:30"),
            (PORT_VAR, "8080"),
        ])
        .unwrap();

        assert_eq!(config.headway_mins, 5);
        assert_eq!(config.service_end, TimeOfDay::at(2, 0));
        assert_eq!(config.last_window_start, TimeOfDay::at(1, 30));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_bad_headway() {
        for bad in ["0", "-3", "three", "2.5"] {
            assert_eq!(
                load(&[(HEADWAY_VAR, bad)]),
                Err(ConfigError::InvalidHeadway {
                    value: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn rejects_bad_time() {
        let err = load(&[(SERVICE_END_VAR, "1h15")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTime {
                var: SERVICE_END_VAR,
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_port() {
        let err = load(&[(PORT_VAR, "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn rejects_end_after_start() {
        let err = load(&[(SERVICE_END_VAR, "06:00")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ServiceEndAfterStart {
                end: TimeOfDay::at(6, 0)
            }
        );
    }

    #[test]
    fn rejects_last_window_after_end() {
        let err = load(&[(LAST_WINDOW_START_VAR, "01:30")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LastWindowAfterEnd {
                start: TimeOfDay::at(1, 30),
                end: TimeOfDay::at(1, 15),
            }
        );
    }

    #[test]
    fn error_display() {
        let err = ConfigError::InvalidHeadway {
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "HEADWAY_MIN must be a positive integer, got \"x\"");

        let err = ConfigError::LastWindowAfterEnd {
            start: TimeOfDay::at(1, 30),
            end: TimeOfDay::at(1, 15),
        };
        assert_eq!(
            err.to_string(),
            "last window start 01:30 must not be after service end 01:15"
        );
    }

    #[test]
    fn service_window_uses_fixed_start() {
        let window = Config::default().service_window();
        assert_eq!(window.start(), SERVICE_START);
        assert_eq!(window.end(), TimeOfDay::at(1, 15));
        assert_eq!(window.last_window_start(), TimeOfDay::at(0, 45));
    }
}
