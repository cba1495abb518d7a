//! Gift section and gift account rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_gift_section` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GiftSection {
    pub invitation_id: DbId,
    pub gift_title: Option<String>,
    pub gift_subtitle: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of the gift section, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGiftSection {
    pub gift_title: Option<String>,
    pub gift_subtitle: Option<String>,
}

/// A row from the `invitation_gift_accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GiftAccount {
    pub id: DbId,
    pub invitation_id: DbId,
    pub sort_order: i32,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_holder: Option<String>,
    pub qr_asset_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One submitted gift-account row (text fields; the QR image travels in
/// the raw submission state).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpsertGiftAccount {
    pub id: Option<DbId>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_holder: Option<String>,
}
