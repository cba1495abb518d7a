//! Repositories for the gift section and its ordered bank accounts.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::gift::{GiftAccount, GiftSection, UpdateGiftSection, UpsertGiftAccount};

const SECTION_COLUMNS: &str =
    "invitation_id, gift_title, gift_subtitle, created_at, updated_at";

const ACCOUNT_COLUMNS: &str = "\
    id, invitation_id, sort_order, bank_name, account_number, account_holder, \
    qr_asset_id, created_at, updated_at";

/// Persistence for the gift section header (one row per invitation).
pub struct GiftSectionRepo;

impl GiftSectionRepo {
    /// Fetch the section row, creating an empty one on first touch.
    pub async fn ensure(pool: &PgPool, invitation_id: DbId) -> Result<GiftSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_gift_section (invitation_id) VALUES ($1)
             ON CONFLICT (invitation_id)
             DO UPDATE SET invitation_id = invitation_gift_section.invitation_id
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, GiftSection>(&query)
            .bind(invitation_id)
            .fetch_one(pool)
            .await
    }

    /// Find the section row, if it has been created.
    pub async fn find(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Option<GiftSection>, sqlx::Error> {
        let query =
            format!("SELECT {SECTION_COLUMNS} FROM invitation_gift_section WHERE invitation_id = $1");
        sqlx::query_as::<_, GiftSection>(&query)
            .bind(invitation_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the section's text fields from a wizard submission.
    pub async fn update_fields(
        pool: &PgPool,
        invitation_id: DbId,
        input: &UpdateGiftSection,
    ) -> Result<GiftSection, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_gift_section SET
                gift_title = $2,
                gift_subtitle = $3
             WHERE invitation_id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, GiftSection>(&query)
            .bind(invitation_id)
            .bind(&input.gift_title)
            .bind(&input.gift_subtitle)
            .fetch_one(pool)
            .await
    }
}

/// Persistence for the ordered gift accounts.
///
/// Unlike events, accounts absent from a resubmission are kept: removal is
/// an explicit admin action, not an implicit side effect of saving.
pub struct GiftAccountRepo;

impl GiftAccountRepo {
    /// List an invitation's gift accounts in display order.
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<GiftAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM invitation_gift_accounts
             WHERE invitation_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, GiftAccount>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }

    /// Upsert one submitted account row at a given position.
    ///
    /// A row id scoped to the invitation updates in place; an unknown or
    /// missing id inserts a new row.
    pub async fn upsert_row(
        pool: &PgPool,
        invitation_id: DbId,
        sort_order: i32,
        row: &UpsertGiftAccount,
    ) -> Result<GiftAccount, sqlx::Error> {
        if let Some(id) = row.id {
            let query = format!(
                "UPDATE invitation_gift_accounts SET
                    sort_order = $3,
                    bank_name = $4,
                    account_number = $5,
                    account_holder = $6
                 WHERE id = $2 AND invitation_id = $1
                 RETURNING {ACCOUNT_COLUMNS}"
            );
            let updated = sqlx::query_as::<_, GiftAccount>(&query)
                .bind(invitation_id)
                .bind(id)
                .bind(sort_order)
                .bind(&row.bank_name)
                .bind(&row.account_number)
                .bind(&row.account_holder)
                .fetch_optional(pool)
                .await?;
            if let Some(account) = updated {
                return Ok(account);
            }
        }

        let query = format!(
            "INSERT INTO invitation_gift_accounts
                (invitation_id, sort_order, bank_name, account_number, account_holder)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, GiftAccount>(&query)
            .bind(invitation_id)
            .bind(sort_order)
            .bind(&row.bank_name)
            .bind(&row.account_number)
            .bind(&row.account_holder)
            .fetch_one(pool)
            .await
    }

    /// Create a bare account row at a given position (reconciler path for a
    /// submitted row that carried no id).
    pub async fn create_row(
        pool: &PgPool,
        invitation_id: DbId,
        sort_order: i32,
    ) -> Result<GiftAccount, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_gift_accounts (invitation_id, sort_order)
             VALUES ($1, $2)
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, GiftAccount>(&query)
            .bind(invitation_id)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Reposition an existing account and point it at its QR asset, scoped
    /// to the invitation. Returns `false` when the id does not belong here.
    pub async fn link_qr_asset(
        pool: &PgPool,
        invitation_id: DbId,
        id: DbId,
        sort_order: i32,
        asset_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE invitation_gift_accounts SET sort_order = $3, qr_asset_id = $4
             WHERE id = $2 AND invitation_id = $1",
        )
        .bind(invitation_id)
        .bind(id)
        .bind(sort_order)
        .bind(asset_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
