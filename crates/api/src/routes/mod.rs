//! Route registration.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod invitations;
pub mod public;

/// Routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/invitations", invitations::router())
}

/// Guest-facing routes mounted at the root.
pub fn public_routes() -> Router<AppState> {
    public::router()
}
