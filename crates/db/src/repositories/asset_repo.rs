//! Repository for the `assets` table.
//!
//! The central operation is the tuple-keyed upsert: an asset is identified
//! by (invitation, category, kind, disk, path), so re-submitting the same
//! path reuses the existing row instead of creating a duplicate. The
//! partial unique index `uq_assets_identity` makes this race-safe under
//! concurrent submissions.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::asset::Asset;

const COLUMNS: &str = "\
    id, invitation_id, kind, category, storage, \
    url, disk, path, mime, alt_text, meta, \
    created_at, updated_at";

/// Provides persistence for invitation-scoped media assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Upsert a locally stored asset by its identifying tuple.
    ///
    /// If a row with the same (invitation, category, kind, disk, path)
    /// already exists, its non-key fields are overwritten and the existing
    /// row is returned; otherwise a new row is created.
    pub async fn upsert_local(
        pool: &PgPool,
        invitation_id: DbId,
        category: &str,
        kind: &str,
        disk: &str,
        path: &str,
        alt_text: &str,
    ) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (invitation_id, kind, category, storage, disk, path, alt_text)
             VALUES ($1, $2, $3, 'local', $4, $5, $6)
             ON CONFLICT (invitation_id, category, kind, disk, path) WHERE storage = 'local'
             DO UPDATE SET alt_text = EXCLUDED.alt_text
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(invitation_id)
            .bind(kind)
            .bind(category)
            .bind(disk)
            .bind(path)
            .bind(alt_text)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every asset scoped to an invitation.
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE invitation_id = $1 ORDER BY id");
        sqlx::query_as::<_, Asset>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }
}
