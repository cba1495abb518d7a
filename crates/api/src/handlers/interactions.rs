//! Handlers for guest RSVP and guestbook submissions.
//!
//! Both resolve the invitation by slug against published status only and
//! validate field-by-field before touching the database. The `website`
//! field is a honeypot: humans never see it, so any content fails
//! validation.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use undangan_core::error::CoreError;
use undangan_core::guest;
use undangan_db::models::guestbook::CreateGuestbookEntry;
use undangan_db::models::invitation::{status, Invitation};
use undangan_db::models::rsvp::CreateRsvpResponse;
use undangan_db::repositories::{GuestbookRepo, InvitationRepo, RsvpResponseRepo};
use undangan_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Longest user-agent string stored with a guest row.
const USER_AGENT_MAX: usize = 1000;

fn validate_attendance_choice(value: &str) -> Result<(), ValidationError> {
    if guest::is_valid_attendance(value) {
        return Ok(());
    }
    Err(ValidationError::new("attendance"))
}

/// Body of `POST /inv/{slug}/rsvp`.
#[derive(Debug, Deserialize, Validate)]
pub struct StoreRsvpRequest {
    #[validate(length(min = 1, max = 150))]
    pub guest_name: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(custom(function = validate_attendance_choice))]
    pub attendance: String,
    #[validate(range(min = 1, max = 10))]
    pub pax: i16,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
    /// Honeypot: must be empty or absent.
    #[validate(length(max = 0))]
    pub website: Option<String>,
}

/// Body of `POST /inv/{slug}/guestbook`.
#[derive(Debug, Deserialize, Validate)]
pub struct StoreGuestbookRequest {
    #[validate(length(min = 1, max = 150))]
    pub guest_name: String,
    #[validate(length(max = 150))]
    pub guest_address: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[validate(custom(function = validate_attendance_choice))]
    pub attendance: Option<String>,
    /// Honeypot: must be empty or absent.
    #[validate(length(max = 0))]
    pub website: Option<String>,
}

async fn find_published_invitation(pool: &DbPool, slug: &str) -> AppResult<Invitation> {
    InvitationRepo::find_by_slug_in_statuses(pool, slug, &[status::PUBLISHED])
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundMsg(format!(
                "Invitation not found for slug: {slug}"
            )))
        })
}

/// Submitter metadata captured with every guest row.
fn client_meta(headers: &HeaderMap) -> (Option<String>, Option<String>) {
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.chars().take(USER_AGENT_MAX).collect());

    (ip_address, user_agent)
}

/// POST /inv/{slug}/rsvp
pub async fn store_rsvp(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(input): Json<StoreRsvpRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let invitation = find_published_invitation(&state.pool, &slug).await?;

    let (ip_address, user_agent) = client_meta(&headers);
    let response = RsvpResponseRepo::create(
        &state.pool,
        invitation.id,
        &CreateRsvpResponse {
            guest_name: input.guest_name,
            phone: input.phone,
            attendance: input.attendance,
            pax: input.pax,
            note: input.note,
            ip_address,
            user_agent,
        },
    )
    .await?;

    // The cached payload embeds guest rows; a new one must not wait out
    // the TTL.
    state.payload_cache.invalidate(invitation.id).await;

    tracing::info!(
        invitation_id = invitation.id,
        rsvp_id = response.id,
        attendance = %response.attendance,
        pax = response.pax,
        "RSVP recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// POST /inv/{slug}/guestbook
pub async fn store_guestbook(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(input): Json<StoreGuestbookRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let invitation = find_published_invitation(&state.pool, &slug).await?;

    let (ip_address, user_agent) = client_meta(&headers);
    let entry = GuestbookRepo::create(
        &state.pool,
        invitation.id,
        &CreateGuestbookEntry {
            guest_name: input.guest_name,
            guest_address: input.guest_address,
            message: input.message,
            attendance: input.attendance,
            ip_address,
            user_agent,
        },
    )
    .await?;

    state.payload_cache.invalidate(invitation.id).await;

    tracing::info!(
        invitation_id = invitation.id,
        entry_id = entry.id,
        "Guestbook entry recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
