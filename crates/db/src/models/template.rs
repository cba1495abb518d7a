//! Template entity model.

use serde::Serialize;
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub version: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
