//! Repositories for the event section and its ordered event rows.

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::event::{Event, EventSection, UpdateEventSection, UpsertEvent};

const SECTION_COLUMNS: &str =
    "invitation_id, section_title, default_location_url, created_at, updated_at";

const EVENT_COLUMNS: &str = "\
    id, invitation_id, sort_order, title, event_date_display, event_time_display, \
    event_date, start_time, end_time, location_text, location_url, \
    created_at, updated_at";

/// Persistence for the event section header (one row per invitation).
pub struct EventSectionRepo;

impl EventSectionRepo {
    /// Fetch the section row, creating an empty one on first touch.
    pub async fn ensure(pool: &PgPool, invitation_id: DbId) -> Result<EventSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_event_section (invitation_id) VALUES ($1)
             ON CONFLICT (invitation_id)
             DO UPDATE SET invitation_id = invitation_event_section.invitation_id
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, EventSection>(&query)
            .bind(invitation_id)
            .fetch_one(pool)
            .await
    }

    /// Find the section row, if it has been created.
    pub async fn find(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Option<EventSection>, sqlx::Error> {
        let query =
            format!("SELECT {SECTION_COLUMNS} FROM invitation_event_section WHERE invitation_id = $1");
        sqlx::query_as::<_, EventSection>(&query)
            .bind(invitation_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the section's text fields from a wizard submission.
    pub async fn update_fields(
        pool: &PgPool,
        invitation_id: DbId,
        input: &UpdateEventSection,
    ) -> Result<EventSection, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_event_section SET
                section_title = $2,
                default_location_url = $3
             WHERE invitation_id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, EventSection>(&query)
            .bind(invitation_id)
            .bind(&input.section_title)
            .bind(&input.default_location_url)
            .fetch_one(pool)
            .await
    }
}

/// Persistence for the ordered event rows.
pub struct EventRepo;

impl EventRepo {
    /// List an invitation's events in display order.
    pub async fn list_for_invitation(
        pool: &PgPool,
        invitation_id: DbId,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM invitation_events
             WHERE invitation_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(invitation_id)
            .fetch_all(pool)
            .await
    }

    /// Replace-style sync of the submitted event rows.
    ///
    /// Rows with a known id (scoped to the invitation) are updated, rows
    /// without one are inserted, and rows missing from the submission are
    /// deleted. Sort order is rewritten to submission position (1-based).
    pub async fn sync_rows(
        pool: &PgPool,
        invitation_id: DbId,
        rows: &[UpsertEvent],
    ) -> Result<Vec<Event>, sqlx::Error> {
        let mut kept: Vec<Event> = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let sort_order = (index + 1) as i32;
            let updated = match row.id {
                Some(id) => Self::update_row(pool, invitation_id, id, sort_order, row).await?,
                None => None,
            };
            let event = match updated {
                Some(event) => event,
                None => Self::insert_row(pool, invitation_id, sort_order, row).await?,
            };
            kept.push(event);
        }

        let kept_ids: Vec<DbId> = kept.iter().map(|e| e.id).collect();
        sqlx::query("DELETE FROM invitation_events WHERE invitation_id = $1 AND NOT (id = ANY($2))")
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
        row: &UpsertEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE invitation_events SET
                sort_order = $3,
                title = $4,
                event_date_display = $5,
                event_time_display = $6,
                event_date = $7,
                start_time = $8,
                end_time = $9,
                location_text = $10,
                location_url = $11
             WHERE id = $2 AND invitation_id = $1
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(invitation_id)
            .bind(id)
            .bind(sort_order)
            .bind(&row.title)
            .bind(&row.event_date_display)
            .bind(&row.event_time_display)
            .bind(row.event_date)
            .bind(row.start_time)
            .bind(row.end_time)
            .bind(&row.location_text)
            .bind(&row.location_url)
            .fetch_optional(pool)
            .await
    }

    async fn insert_row(
        pool: &PgPool,
        invitation_id: DbId,
        sort_order: i32,
        row: &UpsertEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitation_events (
                invitation_id, sort_order, title, event_date_display, event_time_display,
                event_date, start_time, end_time, location_text, location_url
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(invitation_id)
            .bind(sort_order)
            .bind(&row.title)
            .bind(&row.event_date_display)
            .bind(&row.event_time_display)
            .bind(row.event_date)
            .bind(row.start_time)
            .bind(row.end_time)
            .bind(&row.location_text)
            .bind(&row.location_url)
            .fetch_one(pool)
            .await
    }
}
