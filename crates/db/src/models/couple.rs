//! Couple section model (one row per invitation).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_couple` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Couple {
    pub invitation_id: DbId,
    pub couple_tagline: Option<String>,
    pub couple_name_1: Option<String>,
    pub couple_name_2: Option<String>,
    pub wedding_date_display: Option<String>,
    pub couple_image_asset_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of the couple section, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCouple {
    pub couple_tagline: Option<String>,
    pub couple_name_1: Option<String>,
    pub couple_name_2: Option<String>,
    pub wedding_date_display: Option<String>,
}
