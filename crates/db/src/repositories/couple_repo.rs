//! Repository for the `invitation_couple` table.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::couple::{Couple, UpdateCouple};

const COLUMNS: &str = "\
    invitation_id, couple_tagline, couple_name_1, couple_name_2, \
    wedding_date_display, couple_image_asset_id, created_at, updated_at";

/// Persistence for the couple section (one row per invitation).
pub struct CoupleRepo;

impl CoupleRepo {
    /// Fetch the couple row, creating an empty one on first touch.
    pub async fn ensure(pool: &PgPool, invitation_id: DbId) -> Result<Couple, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_couple (invitation_id) VALUES ($1)
             ON CONFLICT (invitation_id)
             DO UPDATE SET invitation_id = invitation_couple.invitation_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Couple>(&query)
            .bind(invitation_id)
            .fetch_one(pool)
            .await
    }

    /// Find the couple row, if it has been created.
    pub async fn find(pool: &PgPool, invitation_id: DbId) -> Result<Option<Couple>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invitation_couple WHERE invitation_id = $1");
        sqlx::query_as::<_, Couple>(&query)
            .bind(invitation_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the couple section's text fields from a wizard submission.
    pub async fn update_fields(
        pool: &PgPool,
        invitation_id: DbId,
        input: &UpdateCouple,
    ) -> Result<Couple, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_couple SET
                couple_tagline = $2,
                couple_name_1 = $3,
                couple_name_2 = $4,
                wedding_date_display = $5
             WHERE invitation_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Couple>(&query)
            .bind(invitation_id)
            .bind(&input.couple_tagline)
            .bind(&input.couple_name_1)
            .bind(&input.couple_name_2)
            .bind(&input.wedding_date_display)
            .fetch_one(pool)
            .await
    }

    /// Point the couple section at its image asset.
    pub async fn set_image_asset(
        pool: &PgPool,
        invitation_id: DbId,
        asset_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE invitation_couple SET couple_image_asset_id = $2 WHERE invitation_id = $1",
        )
        .bind(invitation_id)
        .bind(asset_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
