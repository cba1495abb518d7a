//! Repository for the `invitation_music` table.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::music::{Music, UpdateMusic};

const COLUMNS: &str =
    "invitation_id, audio_asset_id, autoplay, loop_audio, created_at, updated_at";

/// Persistence for the music section (one row per invitation).
pub struct MusicRepo;

impl MusicRepo {
    /// Fetch the music row, creating one with default flags on first touch.
    pub async fn ensure(pool: &PgPool, invitation_id: DbId) -> Result<Music, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_music (invitation_id) VALUES ($1)
             ON CONFLICT (invitation_id)
             DO UPDATE SET invitation_id = invitation_music.invitation_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Music>(&query)
            .bind(invitation_id)
            .fetch_one(pool)
            .await
    }

    /// Find the music row, if it has been created.
    pub async fn find(pool: &PgPool, invitation_id: DbId) -> Result<Option<Music>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invitation_music WHERE invitation_id = $1");
        sqlx::query_as::<_, Music>(&query)
            .bind(invitation_id)
            .fetch_optional(pool)
            .await
    }

    /// Update playback flags; omitted flags keep their current value.
    pub async fn update_flags(
        pool: &PgPool,
        invitation_id: DbId,
        input: &UpdateMusic,
    ) -> Result<Music, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_music SET
                autoplay = COALESCE($2, autoplay),
                loop_audio = COALESCE($3, loop_audio)
             WHERE invitation_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Music>(&query)
            .bind(invitation_id)
            .bind(input.autoplay)
            .bind(input.loop_audio)
            .fetch_one(pool)
            .await
    }

    /// Point the music section at its audio asset.
    pub async fn set_audio_asset(
        pool: &PgPool,
        invitation_id: DbId,
        asset_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE invitation_music SET audio_asset_id = $2 WHERE invitation_id = $1")
            .bind(invitation_id)
            .bind(asset_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
