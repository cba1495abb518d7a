//! Route definitions for the guest-facing invitation pages.
//!
//! ```text
//! GET  /inv/{slug}            -> show_public    (published only, cached)
//! GET  /preview/inv/{slug}    -> show_preview   (draft|published, uncached)
//! POST /inv/{slug}/rsvp       -> store_rsvp
//! POST /inv/{slug}/guestbook  -> store_guestbook
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{interactions, public};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/inv/{slug}", get(public::show_public))
        .route("/preview/inv/{slug}", get(public::show_preview))
        .route("/inv/{slug}/rsvp", post(interactions::store_rsvp))
        .route("/inv/{slug}/guestbook", post(interactions::store_guestbook))
}
