use std::sync::Arc;

use crate::cache::PayloadCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: undangan_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cached render payloads, invalidated on every invitation save/delete.
    pub payload_cache: PayloadCache,
}
