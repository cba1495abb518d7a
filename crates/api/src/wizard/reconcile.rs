//! Asset reconciliation.
//!
//! Walks the raw wizard state (the unstripped widget values, not the
//! persisted attributes), upserts an asset row per resolvable media slot,
//! and relinks the owning child's foreign key. Slots whose value does not
//! resolve to a path are skipped without touching anything; rows from
//! earlier submissions are never deleted here. Running twice with the same
//! input changes nothing on the second pass.

use serde_json::Value;
use undangan_core::types::DbId;
use undangan_core::upload;
use undangan_db::models::asset::{category, kind, Asset, PUBLIC_DISK};
use undangan_db::models::person::role;
use undangan_db::repositories::{
    AssetRepo, CoupleRepo, GalleryRepo, GiftAccountRepo, MusicRepo, PersonRepo,
};
use undangan_db::DbPool;

use crate::error::AppResult;
use crate::wizard::submission::raw_keys;

/// Reconciles submitted media against durable asset rows.
pub struct AssetReconciler {
    pool: DbPool,
}

impl AssetReconciler {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the full reconciliation pass for one invitation.
    pub async fn sync(&self, invitation_id: DbId, raw: &Value) -> AppResult<()> {
        self.sync_couple_image(invitation_id, raw).await?;
        self.sync_person_photo(invitation_id, raw, role::BRIDE, raw_keys::BRIDE_PHOTO)
            .await?;
        self.sync_person_photo(invitation_id, raw, role::GROOM, raw_keys::GROOM_PHOTO)
            .await?;
        self.sync_gallery(invitation_id, raw).await?;
        self.sync_gift_accounts(invitation_id, raw).await?;
        self.sync_music(invitation_id, raw).await?;
        Ok(())
    }

    async fn upsert_image(
        &self,
        invitation_id: DbId,
        asset_category: &str,
        path: &str,
        alt_text: &str,
    ) -> Result<Asset, sqlx::Error> {
        AssetRepo::upsert_local(
            &self.pool,
            invitation_id,
            asset_category,
            kind::IMAGE,
            PUBLIC_DISK,
            path,
            alt_text,
        )
        .await
    }

    async fn sync_couple_image(&self, invitation_id: DbId, raw: &Value) -> AppResult<()> {
        let Some(path) = upload::extract_field_path(raw, raw_keys::COUPLE_IMAGE) else {
            return Ok(());
        };

        let asset = self
            .upsert_image(invitation_id, category::SECTION_IMAGE, &path, "Couple Image")
            .await?;

        CoupleRepo::ensure(&self.pool, invitation_id).await?;
        CoupleRepo::set_image_asset(&self.pool, invitation_id, asset.id).await?;
        tracing::debug!(invitation_id, path, "Linked couple image asset");
        Ok(())
    }

    async fn sync_person_photo(
        &self,
        invitation_id: DbId,
        raw: &Value,
        person_role: &str,
        field: &str,
    ) -> AppResult<()> {
        let Some(path) = upload::extract_field_path(raw, field) else {
            return Ok(());
        };

        let alt_text = match person_role {
            role::BRIDE => "Bride Photo",
            _ => "Groom Photo",
        };
        let asset = self
            .upsert_image(invitation_id, category::SECTION_IMAGE, &path, alt_text)
            .await?;

        PersonRepo::ensure(&self.pool, invitation_id, person_role).await?;
        PersonRepo::set_photo_asset(&self.pool, invitation_id, person_role, asset.id).await?;
        tracing::debug!(invitation_id, person_role, path, "Linked person photo asset");
        Ok(())
    }

    /// Reconcile the gallery rows.
    ///
    /// Each processed row gets `sort_order` = position + 1. A row id scoped
    /// to the invitation updates in place; anything else creates a new
    /// item. Rows without a resolvable image are skipped, and items absent
    /// from the submission are kept.
    async fn sync_gallery(&self, invitation_id: DbId, raw: &Value) -> AppResult<()> {
        let Some(rows) = raw.get(raw_keys::GALLERY_ITEMS).and_then(Value::as_array) else {
            return Ok(());
        };

        for (index, row) in rows.iter().enumerate() {
            let Some(path) = upload::extract_field_path(row, raw_keys::ROW_IMAGE) else {
                continue;
            };
            let sort_order = (index + 1) as i32;

            let asset = self
                .upsert_image(
                    invitation_id,
                    category::GALLERY_IMAGE,
                    &path,
                    &format!("Gallery {}", index + 1),
                )
                .await?;

            let existing = match row_id(row) {
                Some(id) => {
                    GalleryRepo::update_item(&self.pool, invitation_id, id, sort_order, asset.id)
                        .await?
                }
                None => None,
            };
            if existing.is_none() {
                GalleryRepo::create_item(&self.pool, invitation_id, sort_order, asset.id).await?;
            }
        }
        Ok(())
    }

    /// Reconcile the gift-account QR images. Same row semantics as the
    /// gallery; rows without a QR image are left untouched.
    async fn sync_gift_accounts(&self, invitation_id: DbId, raw: &Value) -> AppResult<()> {
        let Some(rows) = raw.get(raw_keys::GIFT_ACCOUNTS).and_then(Value::as_array) else {
            return Ok(());
        };

        for (index, row) in rows.iter().enumerate() {
            let Some(path) = upload::extract_field_path(row, raw_keys::ROW_QR_IMAGE) else {
                continue;
            };
            let sort_order = (index + 1) as i32;

            let asset = self
                .upsert_image(invitation_id, category::OTHER, &path, "Gift QR")
                .await?;

            let linked = match row_id(row) {
                Some(id) => {
                    GiftAccountRepo::link_qr_asset(
                        &self.pool,
                        invitation_id,
                        id,
                        sort_order,
                        asset.id,
                    )
                    .await?
                }
                None => false,
            };
            if !linked {
                let account =
                    GiftAccountRepo::create_row(&self.pool, invitation_id, sort_order).await?;
                GiftAccountRepo::link_qr_asset(
                    &self.pool,
                    invitation_id,
                    account.id,
                    sort_order,
                    asset.id,
                )
                .await?;
            }
        }
        Ok(())
    }

    async fn sync_music(&self, invitation_id: DbId, raw: &Value) -> AppResult<()> {
        let Some(path) = upload::extract_field_path(raw, raw_keys::MUSIC_AUDIO) else {
            return Ok(());
        };

        let asset = AssetRepo::upsert_local(
            &self.pool,
            invitation_id,
            category::MUSIC,
            kind::AUDIO,
            PUBLIC_DISK,
            &path,
            "Invitation Music",
        )
        .await?;

        MusicRepo::ensure(&self.pool, invitation_id).await?;
        MusicRepo::set_audio_asset(&self.pool, invitation_id, asset.id).await?;
        tracing::debug!(invitation_id, path, "Linked music audio asset");
        Ok(())
    }
}

fn row_id(row: &Value) -> Option<DbId> {
    row.get(raw_keys::ROW_ID).and_then(Value::as_i64)
}
