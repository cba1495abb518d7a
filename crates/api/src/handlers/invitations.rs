//! Handlers for the wizard's invitation endpoints.
//!
//! The create/save endpoints accept the wizard's flat JSON document twice
//! over: once deserialized into the typed [`WizardSubmission`] (the
//! stripped state that reaches the rows), and once verbatim as the raw
//! state the asset reconciler walks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use undangan_core::error::CoreError;
use undangan_core::types::DbId;
use undangan_db::repositories::InvitationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::wizard::{form, InvitationService, WizardSubmission};

fn parse_submission(raw: &Value) -> AppResult<WizardSubmission> {
    serde_json::from_value(raw.clone())
        .map_err(|e| AppError::BadRequest(format!("Invalid wizard submission: {e}")))
}

/// POST /api/v1/invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let submission = parse_submission(&raw)?;
    let invitation = InvitationService::new(&state).create(&submission, &raw).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: invitation })))
}

/// GET /api/v1/invitations/{id}
///
/// The full aggregate, for the wizard and admin views.
pub async fn get_invitation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let invitation = InvitationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Invitation",
            id,
        })?;
    let aggregate = InvitationRepo::load_aggregate(&state.pool, invitation).await?;
    Ok(Json(DataResponse { data: aggregate }))
}

/// GET /api/v1/invitations/{id}/form
///
/// The flat prefill document the wizard re-opens with.
pub async fn get_invitation_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let invitation = InvitationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Invitation",
            id,
        })?;
    let aggregate = InvitationRepo::load_aggregate(&state.pool, invitation).await?;
    Ok(Json(DataResponse {
        data: form::form_state(&aggregate),
    }))
}

/// PUT /api/v1/invitations/{id}
pub async fn update_invitation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(raw): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let submission = parse_submission(&raw)?;
    let invitation = InvitationService::new(&state).save(id, &submission, &raw).await?;
    Ok(Json(DataResponse { data: invitation }))
}

/// DELETE /api/v1/invitations/{id}
pub async fn delete_invitation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    InvitationService::new(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
