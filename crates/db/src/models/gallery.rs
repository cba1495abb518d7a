//! Gallery item model (ordered images of an invitation).

use serde::Serialize;
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_gallery_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub invitation_id: DbId,
    pub sort_order: i32,
    pub image_asset_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
