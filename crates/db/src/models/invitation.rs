//! Invitation entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// Invitation lifecycle statuses.
pub mod status {
    pub const DRAFT: &str = "draft";
    pub const PUBLISHED: &str = "published";
    pub const ARCHIVED: &str = "archived";
}

/// A row from the `invitations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invitation {
    pub id: DbId,
    pub template_id: DbId,
    pub slug: String,
    pub title: Option<String>,
    pub timezone: String,
    pub locale: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invitation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvitation {
    pub template_id: DbId,
    pub slug: String,
    pub title: Option<String>,
    /// Defaults to `Asia/Jakarta` if omitted.
    pub timezone: Option<String>,
    /// Defaults to `id_ID` if omitted.
    pub locale: Option<String>,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing invitation. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvitation {
    pub template_id: Option<DbId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub timezone: Option<String>,
    pub locale: Option<String>,
    pub status: Option<String>,
}
