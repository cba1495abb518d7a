//! Person model: the bride and groom rows of an invitation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// The two roles an invitation person can have. Exactly one row per role
/// exists per invitation.
pub mod role {
    pub const BRIDE: &str = "bride";
    pub const GROOM: &str = "groom";
}

/// A row from the `invitation_people` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub invitation_id: DbId,
    pub role: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub instagram_handle: Option<String>,
    pub photo_asset_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Profile fields of one person, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonProfile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub instagram_handle: Option<String>,
}
