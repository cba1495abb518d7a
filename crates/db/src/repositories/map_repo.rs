//! Repository for the `invitation_map` table.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::map::{MapSection, UpdateMapSection};

const COLUMNS: &str = "\
    invitation_id, map_section_title, map_address, map_embed_src, \
    map_location_url, created_at, updated_at";

/// Persistence for the map section (one row per invitation).
pub struct MapRepo;

impl MapRepo {
    /// Fetch the map row, creating an empty one on first touch.
    pub async fn ensure(pool: &PgPool, invitation_id: DbId) -> Result<MapSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_map (invitation_id) VALUES ($1)
             ON CONFLICT (invitation_id)
             DO UPDATE SET invitation_id = invitation_map.invitation_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MapSection>(&query)
            .bind(invitation_id)
            .fetch_one(pool)
            .await
    }

    /// Find the map row, if it has been created.
    pub async fn find(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Option<MapSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invitation_map WHERE invitation_id = $1");
        sqlx::query_as::<_, MapSection>(&query)
            .bind(invitation_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the map section's fields from a wizard submission.
    pub async fn update_fields(
        pool: &PgPool,
        invitation_id: DbId,
        input: &UpdateMapSection,
    ) -> Result<MapSection, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_map SET
                map_section_title = $2,
                map_address = $3,
                map_embed_src = $4,
                map_location_url = $5
             WHERE invitation_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MapSection>(&query)
            .bind(invitation_id)
            .bind(&input.map_section_title)
            .bind(&input.map_address)
            .bind(&input.map_embed_src)
            .bind(&input.map_location_url)
            .fetch_one(pool)
            .await
    }
}
