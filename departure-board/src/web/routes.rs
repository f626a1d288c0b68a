//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::board::{DepartureBoard, TransitProvider};
use crate::domain::{LineId, Point, StopId};
use crate::provider::ProviderError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: TransitProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/journeys", get(next_journeys::<P>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next distinct journeys at a stop, plus the next arrival per terminus.
///
/// The previous answer for the same stop and line is fed back to the board
/// and replaced by the new one.
async fn next_journeys<P>(
    State(state): State<AppState<P>>,
    Query(req): Query<JourneysRequest>,
) -> Result<Json<JourneysResponse>, AppError>
where
    P: TransitProvider + Send + Sync + 'static,
{
    let stop = StopId::new(req.stop).map_err(|e| AppError::BadRequest {
        message: format!("Invalid stop: {e}"),
    })?;
    let line = LineId::new(req.line).map_err(|e| AppError::BadRequest {
        message: format!("Invalid line: {e}"),
    })?;

    let reference = match (req.lat, req.lon) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
            Some(Point::new(lat, lon))
        }
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest {
                message: "lat and lon must be finite numbers".to_string(),
            });
        }
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest {
                message: "lat and lon must be given together".to_string(),
            });
        }
    };

    let previous = state.snapshots.get(&stop, &line).await;
    let journeys = state
        .board
        .next_journeys(&stop, &line, reference, &previous)
        .await?;

    let arrivals = DepartureBoard::<P>::next_unique_terminus_arrivals(&journeys);

    let response = JourneysResponse {
        journeys: journeys.iter().map(JourneyResult::from_resolved).collect(),
        terminus_arrivals: arrivals
            .iter()
            .map(TerminusArrivalResult::from_arrival)
            .collect(),
    };

    state.snapshots.store(stop, line, journeys).await;

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
