//! Wish section and curated wish samples.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_wish_section` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WishSection {
    pub invitation_id: DbId,
    pub wish_title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of the wish section, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWishSection {
    pub wish_title: Option<String>,
}

/// A row from the `invitation_wish_samples` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WishSample {
    pub id: DbId,
    pub invitation_id: DbId,
    pub sort_order: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One submitted wish-sample row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpsertWishSample {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
}
