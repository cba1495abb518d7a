//! Event section and event rows.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_event_section` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventSection {
    pub invitation_id: DbId,
    pub section_title: Option<String>,
    pub default_location_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of the event section, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventSection {
    pub section_title: Option<String>,
    pub default_location_url: Option<String>,
}

/// A row from the `invitation_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub invitation_id: DbId,
    pub sort_order: i32,
    pub title: Option<String>,
    pub event_date_display: Option<String>,
    pub event_time_display: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location_text: Option<String>,
    pub location_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One submitted event row. `id` present = update target, absent = new row.
/// Sort order is re-derived from the row's position in the submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpsertEvent {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub event_date_display: Option<String>,
    pub event_time_display: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location_text: Option<String>,
    pub location_url: Option<String>,
}
