//! Repositories for the wish section and its curated samples.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::wish::{UpdateWishSection, UpsertWishSample, WishSample, WishSection};

const SECTION_COLUMNS: &str = "invitation_id, wish_title, created_at, updated_at";

const SAMPLE_COLUMNS: &str =
    "id, invitation_id, sort_order, name, address, message, created_at, updated_at";

/// Persistence for the wish section header (one row per invitation).
pub struct WishSectionRepo;

impl WishSectionRepo {
    /// Fetch the section row, creating an empty one on first touch.
    pub async fn ensure(pool: &PgPool, invitation_id: DbId) -> Result<WishSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_wish_section (invitation_id) VALUES ($1)
             ON CONFLICT (invitation_id)
             DO UPDATE SET invitation_id = invitation_wish_section.invitation_id
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, WishSection>(&query)
            .bind(invitation_id)
            .fetch_one(pool)
            .await
    }

    /// Find the section row, if it has been created.
    pub async fn find(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Option<WishSection>, sqlx::Error> {
        let query =
            format!("SELECT {SECTION_COLUMNS} FROM invitation_wish_section WHERE invitation_id = $1");
        sqlx::query_as::<_, WishSection>(&query)
            .bind(invitation_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the section's title from a wizard submission.
    pub async fn update_fields(
        pool: &PgPool,
        invitation_id: DbId,
        input: &UpdateWishSection,
    ) -> Result<WishSection, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_wish_section SET wish_title = $2
             WHERE invitation_id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, WishSection>(&query)
            .bind(invitation_id)
            .bind(&input.wish_title)
            .fetch_one(pool)
            .await
    }
}

/// Persistence for the ordered wish samples.
pub struct WishSampleRepo;

impl WishSampleRepo {
    /// List an invitation's wish samples in display order.
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<WishSample>, sqlx::Error> {
        let query = format!(
            "SELECT {SAMPLE_COLUMNS} FROM invitation_wish_samples
             WHERE invitation_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, WishSample>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }

    /// Replace-style sync of the submitted wish-sample rows (same contract
    /// as event rows).
    pub async fn sync_rows(
        pool: &PgPool,
        invitation_id: DbId,
        rows: &[UpsertWishSample],
    ) -> Result<Vec<WishSample>, sqlx::Error> {
        let mut kept: Vec<WishSample> = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let sort_order = (index + 1) as i32;
            let updated = match row.id {
                Some(id) => Self::update_row(pool, invitation_id, id, sort_order, row).await?,
                None => None,
            };
            let sample = match updated {
                Some(sample) => sample,
                None => Self::insert_row(pool, invitation_id, sort_order, row).await?,
            };
            kept.push(sample);
        }

        let kept_ids: Vec<DbId> = kept.iter().map(|s| s.id).collect();
        sqlx::query(
            "DELETE FROM invitation_wish_samples WHERE invitation_id = $1 AND NOT (id = ANY($2))",
        )
        .bind(invitation_id)
        .bind(&kept_ids)
        .execute(pool)
        .await?;

        Ok(kept)
    }

    async fn update_row(
        pool: &PgPool,
        invitation_id: DbId,
        id: DbId,
        sort_order: i32,
        row: &UpsertWishSample,
    ) -> Result<Option<WishSample>, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_wish_samples SET
                sort_order = $3, name = $4, address = $5, message = $6
             WHERE id = $2 AND invitation_id = $1
             RETURNING {SAMPLE_COLUMNS}"
        );
        sqlx::query_as::<_, WishSample>(&query)
            .bind(invitation_id)
            .bind(id)
            .bind(sort_order)
            .bind(&row.name)
            .bind(&row.address)
            .bind(&row.message)
            .fetch_optional(pool)
            .await
    }

    async fn insert_row(
        pool: &PgPool,
        invitation_id: DbId,
        sort_order: i32,
        row: &UpsertWishSample,
    ) -> Result<WishSample, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_wish_samples (invitation_id, sort_order, name, address, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {SAMPLE_COLUMNS}"
        );
        sqlx::query_as::<_, WishSample>(&query)
            .bind(invitation_id)
            .bind(sort_order)
            .bind(&row.name)
            .bind(&row.address)
            .bind(&row.message)
            .fetch_one(pool)
            .await
    }
}
