//! Handlers for the guest-facing invitation pages.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::render::TemplateRenderer;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /inv/{slug}
///
/// Render a published invitation through the payload cache. Unknown or
/// unpublished slugs are a 404.
pub async fn show_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let rendered = TemplateRenderer::new(&state)
        .render_public_by_slug(&slug)
        .await?;
    Ok(Json(DataResponse { data: rendered }))
}

/// GET /preview/inv/{slug}
///
/// Render a draft or published invitation, always recomputed. Session
/// enforcement sits in the fronting proxy.
pub async fn show_preview(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let rendered = TemplateRenderer::new(&state)
        .render_preview_by_slug(&slug)
        .await?;
    Ok(Json(DataResponse { data: rendered }))
}
