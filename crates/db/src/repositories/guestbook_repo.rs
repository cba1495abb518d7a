//! Repository for the `invitation_guestbook_entries` table.

use sqlx::PgPool;
use undangan_core::guest;
use undangan_core::types::DbId;

use crate::models::guestbook::{CreateGuestbookEntry, GuestbookEntry};

const COLUMNS: &str = "\
    id, invitation_id, guest_name, guest_address, message, attendance, \
    ip_address, user_agent, created_at, updated_at";

/// Persistence for guest wishes left on a published invitation.
pub struct GuestbookRepo;

impl GuestbookRepo {
    /// Append a guestbook entry. An unstated attendance is stored as
    /// `unknown`.
    pub async fn create(
        pool: &PgPool,
        invitation_id: DbId,
        input: &CreateGuestbookEntry,
    ) -> Result<GuestbookEntry, sqlx::Error> {
        let attendance = input
            .attendance
            .as_deref()
            .unwrap_or(guest::ATTENDANCE_UNKNOWN);
        let query = format!(
            "INSERT INTO invitation_guestbook_entries
                (invitation_id, guest_name, guest_address, message, attendance, ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuestbookEntry>(&query)
            .bind(invitation_id)
            .bind(&input.guest_name)
            .bind(&input.guest_address)
            .bind(&input.message)
            .bind(attendance)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// List an invitation's entries, most recent first.
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<GuestbookEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invitation_guestbook_entries
             WHERE invitation_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, GuestbookEntry>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }
}
