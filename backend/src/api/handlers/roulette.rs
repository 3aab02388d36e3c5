use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use crate::api::models::{HistoryParams, MessageResponse, SpinResponse, WinnerResponse};
use crate::database::{self, persons, winners, RecordedSpin};
use crate::roulette::SpinError;
use super::{ApiError, AppState};

pub async fn spin(State(state): State<Arc<AppState>>) -> Result<Json<SpinResponse>, ApiError> {
    let now = state.clock.now();
    // Each request draws from its own generator; the shared one only seeds it.
    let mut rng = {
        let mut seed = state
            .rng
            .lock()
            .map_err(|_| ApiError::internal("Random source unavailable"))?;
        StdRng::from_rng(&mut *seed)
            .map_err(|_| ApiError::internal("Random source unavailable"))?
    };

    let pool = state.pool.clone();
    let recorded = tokio::task::spawn_blocking(move || -> Result<RecordedSpin, SpinError> {
        let mut conn = database::get_connection(&pool)?;
        database::spin_in_transaction(&mut conn, now, &mut rng)
    })
    .await
    .map_err(|err| {
        error!("Spin task failed: {}", err);
        ApiError::internal("Failed to update winner")
    })?
    .map_err(spin_error)?;

    Ok(Json(SpinResponse {
        winner: recorded.winner.into(),
        total_participants: recorded.outcome.total_participants,
    }))
}

fn spin_error(err: SpinError) -> ApiError {
    match err {
        SpinError::NoEligibleCandidates => {
            warn!("Spin requested with nobody present");
            ApiError::bad_request("No present persons to select from")
        }
        other => {
            error!("Spin failed: {:?}", other);
            ApiError::internal("Failed to update winner")
        }
    }
}

pub async fn history(
    State(state): State<Arc<AppState>>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<Vec<WinnerResponse>>, ApiError> {
    let Query(params) = params?;
    let limit = state.config.history.clamp_limit(params.limit);
    let conn = database::get_connection(&state.pool)?;

    let rows = winners::list_recent(&conn, limit)?;
    Ok(Json(rows.into_iter().map(WinnerResponse::from).collect()))
}

pub async fn reset_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = database::get_connection(&state.pool)?;

    let reset = persons::reset_all_wins(&conn, state.clock.now())?;
    info!("Reset win counts for {} persons", reset);
    Ok(Json(MessageResponse::new("Win counts reset successfully")))
}
