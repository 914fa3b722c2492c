//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Arrival;
use crate::schedule::{Departures, ScheduleResult};

/// Query parameters for `GET /next-metro`.
///
/// Everything is optional at this level so that missing or malformed values
/// can be reported with the API's own error bodies.
#[derive(Debug, Default, Deserialize)]
pub struct NextMetroRequest {
    /// Station name
    pub station: Option<String>,

    /// Simulated time in HH:MM format (defaults to now)
    pub time: Option<String>,

    /// Number of arrivals, 1 to 5 (defaults to 1)
    pub n: Option<String>,
}

/// Schedule for a single upcoming arrival.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextArrivalResponse {
    pub station: String,
    pub line: String,
    pub headway_min: u32,
    /// Arrival time, HH:MM
    pub next_arrival: String,
    /// Whether the query time is in the last-train period
    pub is_last: bool,
    pub tz: String,
}

/// Schedule for several upcoming arrivals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalsResponse {
    pub station: String,
    pub line: String,
    pub headway_min: u32,
    pub tz: String,
    pub arrivals: Vec<ArrivalResult>,
}

/// One arrival in a multi-arrival schedule.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalResult {
    /// Arrival time, HH:MM
    pub time: String,
    pub is_last: bool,
}

impl From<&Arrival> for ArrivalResult {
    fn from(arrival: &Arrival) -> Self {
        Self {
            time: arrival.time.to_string(),
            is_last: arrival.is_last,
        }
    }
}

/// Successful next-metro response, in either shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScheduleResponse {
    Next(NextArrivalResponse),
    Arrivals(ArrivalsResponse),
}

impl From<ScheduleResult> for ScheduleResponse {
    fn from(result: ScheduleResult) -> Self {
        let line = result.line.to_string();
        let tz = result.tz.to_string();

        match result.departures {
            Departures::Next { arrival, is_last } => Self::Next(NextArrivalResponse {
                station: result.station,
                line,
                headway_min: result.headway_mins,
                next_arrival: arrival.to_string(),
                is_last,
                tz,
            }),
            Departures::Upcoming(arrivals) => Self::Arrivals(ArrivalsResponse {
                station: result.station,
                line,
                headway_min: result.headway_mins,
                tz,
                arrivals: arrivals.iter().map(ArrivalResult::from).collect(),
            }),
        }
    }
}

/// Response when no trains are running.
#[derive(Debug, Serialize)]
pub struct ServiceClosedResponse {
    pub service: &'static str,
}

impl ServiceClosedResponse {
    pub fn new() -> Self {
        Self { service: "closed" }
    }
}

impl Default for ServiceClosedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response for an unknown station.
#[derive(Debug, Serialize)]
pub struct UnknownStationResponse {
    pub error: &'static str,
    pub suggestions: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
