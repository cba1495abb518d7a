//! Repository for the `invitation_gallery_items` table.
//!
//! Gallery rows are created and relinked by the asset reconciler; rows
//! absent from a resubmission are kept, never pruned.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::gallery::GalleryItem;

const COLUMNS: &str =
    "id, invitation_id, sort_order, image_asset_id, created_at, updated_at";

/// Persistence for the ordered gallery images.
pub struct GalleryRepo;

impl GalleryRepo {
    /// List an invitation's gallery items in display order.
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invitation_gallery_items
             WHERE invitation_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }

    /// Create a gallery item at a given position.
    pub async fn create_item(
        pool: &PgPool,
        invitation_id: DbId,
        sort_order: i32,
        image_asset_id: DbId,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_gallery_items (invitation_id, sort_order, image_asset_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(invitation_id)
            .bind(sort_order)
            .bind(image_asset_id)
            .fetch_one(pool)
            .await
    }

    /// Reposition and relink an existing item, scoped to the invitation.
    ///
    /// Returns `None` when the id does not belong to this invitation; the
    /// caller treats that as a create.
    pub async fn update_item(
        pool: &PgPool,
        invitation_id: DbId,
        id: DbId,
        sort_order: i32,
        image_asset_id: DbId,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_gallery_items SET sort_order = $3, image_asset_id = $4
             WHERE id = $2 AND invitation_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(invitation_id)
            .bind(id)
            .bind(sort_order)
            .bind(image_asset_id)
            .fetch_optional(pool)
            .await
    }
}
