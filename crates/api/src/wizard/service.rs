//! The explicit invitation lifecycle.
//!
//! Create, save, and delete are plain service methods: each one seeds
//! default children, persists the typed submission, invalidates the cached
//! payload, and runs asset reconciliation, in that order, with no hidden
//! model-event hooks.

use serde_json::Value;
use undangan_core::error::CoreError;
use undangan_core::types::DbId;
use undangan_db::models::invitation::Invitation;
use undangan_db::models::person::role;
use undangan_db::repositories::{
    CoupleRepo, EventRepo, EventSectionRepo, GiftAccountRepo, GiftSectionRepo, InvitationRepo,
    MapRepo, MusicRepo, PersonRepo, RsvpRepo, WishSampleRepo, WishSectionRepo,
};
use undangan_db::DbPool;

use crate::cache::PayloadCache;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::wizard::reconcile::AssetReconciler;
use crate::wizard::submission::{raw_keys, WizardSubmission};

/// Application service for invitation writes.
pub struct InvitationService {
    pool: DbPool,
    cache: PayloadCache,
}

impl InvitationService {
    pub fn new(state: &AppState) -> Self {
        Self {
            pool: state.pool.clone(),
            cache: state.payload_cache.clone(),
        }
    }

    /// Create an invitation from a wizard submission.
    pub async fn create(
        &self,
        submission: &WizardSubmission,
        raw: &Value,
    ) -> AppResult<Invitation> {
        let input = submission.as_create()?;
        let invitation = InvitationRepo::create(&self.pool, &input).await?;

        InvitationRepo::ensure_defaults(&self.pool, invitation.id).await?;
        let raw = self.persist_children(invitation.id, submission, raw).await?;
        AssetReconciler::new(self.pool.clone())
            .sync(invitation.id, &raw)
            .await?;

        // Invalidate only after every write has landed; a reader racing the
        // save must not re-cache half-reconciled state.
        self.cache.invalidate(invitation.id).await;

        tracing::info!(invitation_id = invitation.id, slug = %invitation.slug, "Invitation created");
        Ok(invitation)
    }

    /// Apply a wizard submission to an existing invitation.
    pub async fn save(
        &self,
        id: DbId,
        submission: &WizardSubmission,
        raw: &Value,
    ) -> AppResult<Invitation> {
        let invitation = InvitationRepo::update(&self.pool, id, &submission.as_update())
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Invitation",
                id,
            })?;

        InvitationRepo::ensure_defaults(&self.pool, id).await?;
        let raw = self.persist_children(id, submission, raw).await?;
        AssetReconciler::new(self.pool.clone()).sync(id, &raw).await?;

        self.cache.invalidate(id).await;

        tracing::info!(invitation_id = id, "Invitation saved");
        Ok(invitation)
    }

    /// Delete an invitation; children and assets cascade with it.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let deleted = InvitationRepo::delete(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Invitation",
                id,
            }));
        }
        self.cache.invalidate(id).await;
        tracing::info!(invitation_id = id, "Invitation deleted");
        Ok(())
    }

    /// Persist the typed child fields of a submission.
    ///
    /// Returns the raw state with the ids of upserted gift-account rows
    /// injected, so the reconciler targets those rows instead of creating
    /// duplicates.
    async fn persist_children(
        &self,
        id: DbId,
        submission: &WizardSubmission,
        raw: &Value,
    ) -> AppResult<Value> {
        CoupleRepo::update_fields(&self.pool, id, &submission.couple_fields()).await?;
        PersonRepo::update_profile(&self.pool, id, role::BRIDE, &submission.bride_profile())
            .await?;
        PersonRepo::update_profile(&self.pool, id, role::GROOM, &submission.groom_profile())
            .await?;
        EventSectionRepo::update_fields(&self.pool, id, &submission.event_section_fields())
            .await?;
        MapRepo::update_fields(&self.pool, id, &submission.map_fields()).await?;
        RsvpRepo::update_fields(&self.pool, id, &submission.rsvp_fields()).await?;
        GiftSectionRepo::update_fields(&self.pool, id, &submission.gift_section_fields()).await?;
        WishSectionRepo::update_fields(&self.pool, id, &submission.wish_section_fields()).await?;
        MusicRepo::update_flags(&self.pool, id, &submission.music_flags()).await?;

        EventRepo::sync_rows(&self.pool, id, &submission.events).await?;
        WishSampleRepo::sync_rows(&self.pool, id, &submission.wish_samples).await?;

        let mut account_ids = Vec::with_capacity(submission.gift_accounts.len());
        for (index, row) in submission.gift_accounts.iter().enumerate() {
            let account =
                GiftAccountRepo::upsert_row(&self.pool, id, (index + 1) as i32, row).await?;
            account_ids.push(account.id);
        }

        Ok(inject_gift_account_ids(raw, &account_ids))
    }
}

/// Stamp persisted gift-account row ids back into the raw state so media
/// reconciliation updates the rows that were just written.
fn inject_gift_account_ids(raw: &Value, account_ids: &[DbId]) -> Value {
    let mut raw = raw.clone();
    if let Some(rows) = raw
        .get_mut(raw_keys::GIFT_ACCOUNTS)
        .and_then(Value::as_array_mut)
    {
        for (row, id) in rows.iter_mut().zip(account_ids) {
            if let Some(row) = row.as_object_mut() {
                row.insert(raw_keys::ROW_ID.into(), Value::from(*id));
            }
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gift_account_ids_are_injected_by_position() {
        let raw = json!({
            "gift_accounts": [
                {"bank_name": "BCA", "qr_image": "qr/a.png"},
                {"id": 7, "bank_name": "Mandiri"}
            ]
        });

        let annotated = inject_gift_account_ids(&raw, &[41, 42]);
        let rows = annotated["gift_accounts"].as_array().unwrap();
        assert_eq!(rows[0]["id"], json!(41));
        assert_eq!(rows[1]["id"], json!(42));
        // Media values are untouched.
        assert_eq!(rows[0]["qr_image"], json!("qr/a.png"));
    }
}
