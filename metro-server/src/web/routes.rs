//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

use crate::domain::{ArrivalCount, InvalidArrivalCount};
use crate::schedule::QueryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/next-metro", get(next_metro))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next arrivals at a station.
async fn next_metro(
    State(state): State<AppState>,
    Query(req): Query<NextMetroRequest>,
) -> Result<Response, AppError> {
    let station = req
        .station
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "missing station".to_string(),
        })?;

    let count = match req.n.as_deref() {
        Some(n) => ArrivalCount::parse(n)?,
        None => ArrivalCount::default(),
    };

    match state.schedule.query(station, req.time.as_deref(), count) {
        Ok(result) => {
            info!(station, %count, "next metro");
            Ok(Json(ScheduleResponse::from(result)).into_response())
        }
        Err(QueryError::ServiceClosed) => Ok(Json(ServiceClosedResponse::new()).into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Fallback for unknown routes.
async fn not_found() -> AppError {
    AppError::NotFound {
        message: "not found".to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    UnknownStation { suggestions: Vec<String> },
    NotFound { message: String },
}

impl From<InvalidArrivalCount> for AppError {
    fn from(e: InvalidArrivalCount) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::UnknownStation { suggestions } => AppError::UnknownStation { suggestions },
            other => AppError::BadRequest {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { message } => {
                warn!(status = %StatusCode::BAD_REQUEST, "{message}");
                let body = Json(ErrorResponse { error: message });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::UnknownStation { suggestions } => {
                warn!(status = %StatusCode::NOT_FOUND, ?suggestions, "unknown station");
                let body = Json(UnknownStationResponse {
                    error: "unknown station",
                    suggestions,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::NotFound { message } => {
                let body = Json(ErrorResponse { error: message });
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}
