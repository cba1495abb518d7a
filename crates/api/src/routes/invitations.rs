//! Route definitions for the wizard's invitation endpoints.
//!
//! All routes are mounted under `/api/v1/invitations`.
//!
//! ```text
//! POST   /            -> create_invitation
//! GET    /{id}        -> get_invitation
//! PUT    /{id}        -> update_invitation
//! DELETE /{id}        -> delete_invitation
//! GET    /{id}/form   -> get_invitation_form
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::invitations;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(invitations::create_invitation))
        .route(
            "/{id}",
            get(invitations::get_invitation)
                .put(invitations::update_invitation)
                .delete(invitations::delete_invitation),
        )
        .route("/{id}/form", get(invitations::get_invitation_form))
}
