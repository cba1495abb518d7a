//! Map section model (one row per invitation).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_map` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MapSection {
    pub invitation_id: DbId,
    pub map_section_title: Option<String>,
    pub map_address: Option<String>,
    pub map_embed_src: Option<String>,
    pub map_location_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of the map section, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMapSection {
    pub map_section_title: Option<String>,
    pub map_address: Option<String>,
    pub map_embed_src: Option<String>,
    pub map_location_url: Option<String>,
}
