//! Repositories for the RSVP section text and guest RSVP responses.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::rsvp::{CreateRsvpResponse, Rsvp, RsvpResponse, UpdateRsvp};

const SECTION_COLUMNS: &str = "\
    invitation_id, rsvp_title, rsvp_subtitle, rsvp_message, rsvp_hosts, \
    created_at, updated_at";

const RESPONSE_COLUMNS: &str = "\
    id, invitation_id, guest_name, phone, attendance, pax, note, \
    ip_address, user_agent, created_at, updated_at";

/// Persistence for the RSVP section (one row per invitation).
pub struct RsvpRepo;

impl RsvpRepo {
    /// Fetch the RSVP section row, creating an empty one on first touch.
    pub async fn ensure(pool: &PgPool, invitation_id: DbId) -> Result<Rsvp, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_rsvp (invitation_id) VALUES ($1)
             ON CONFLICT (invitation_id)
             DO UPDATE SET invitation_id = invitation_rsvp.invitation_id
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, Rsvp>(&query)
            .bind(invitation_id)
            .fetch_one(pool)
            .await
    }

    /// Find the RSVP section row, if it has been created.
    pub async fn find(pool: &PgPool, invitation_id: DbId) -> Result<Option<Rsvp>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM invitation_rsvp WHERE invitation_id = $1");
        sqlx::query_as::<_, Rsvp>(&query)
            .bind(invitation_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the RSVP section's text fields from a wizard submission.
    pub async fn update_fields(
        pool: &PgPool,
        invitation_id: DbId,
        input: &UpdateRsvp,
    ) -> Result<Rsvp, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_rsvp SET
                rsvp_title = $2,
                rsvp_subtitle = $3,
                rsvp_message = $4,
                rsvp_hosts = $5
             WHERE invitation_id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, Rsvp>(&query)
            .bind(invitation_id)
            .bind(&input.rsvp_title)
            .bind(&input.rsvp_subtitle)
            .bind(&input.rsvp_message)
            .bind(&input.rsvp_hosts)
            .fetch_one(pool)
            .await
    }
}

/// Persistence for guest RSVP responses.
pub struct RsvpResponseRepo;

impl RsvpResponseRepo {
    /// Append a guest response to an invitation.
    pub async fn create(
        pool: &PgPool,
        invitation_id: DbId,
        input: &CreateRsvpResponse,
    ) -> Result<RsvpResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_rsvp_responses
                (invitation_id, guest_name, phone, attendance, pax, note, ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {RESPONSE_COLUMNS}"
        );
        sqlx::query_as::<_, RsvpResponse>(&query)
            .bind(invitation_id)
            .bind(&input.guest_name)
            .bind(&input.phone)
            .bind(&input.attendance)
            .bind(input.pax)
            .bind(&input.note)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// List an invitation's responses, most recent first.
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<RsvpResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {RESPONSE_COLUMNS} FROM invitation_rsvp_responses
             WHERE invitation_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, RsvpResponse>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }

    /// Count an invitation's responses.
    pub async fn count_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM invitation_rsvp_responses WHERE invitation_id = $1")
                .bind(invitation_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
