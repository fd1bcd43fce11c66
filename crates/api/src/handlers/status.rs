//! Handlers for the legacy status check log.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use drawer_core::status_check::{NewStatusCheck, StatusCheck};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/status
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StatusCheck>>> {
    let checks = state.status_log.list_all().await?;
    Ok(Json(checks))
}

/// POST /api/status
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<NewStatusCheck>,
) -> AppResult<(StatusCode, Json<StatusCheck>)> {
    let check = state.status_log.append(input).await?;

    tracing::debug!(check_id = %check.id, client_name = %check.client_name, "Status check recorded");

    Ok((StatusCode::CREATED, Json(check)))
}
