//! Guestbook entry model.

use serde::Serialize;
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_guestbook_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GuestbookEntry {
    pub id: DbId,
    pub invitation_id: DbId,
    pub guest_name: String,
    pub guest_address: Option<String>,
    pub message: String,
    pub attendance: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a guestbook entry.
#[derive(Debug, Clone)]
pub struct CreateGuestbookEntry {
    pub guest_name: String,
    pub guest_address: Option<String>,
    pub message: String,
    /// Stored as `unknown` when the guest did not state attendance.
    pub attendance: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
