//! RSVP section text and guest RSVP responses.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_rsvp` table (section copy shown to guests).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rsvp {
    pub invitation_id: DbId,
    pub rsvp_title: Option<String>,
    pub rsvp_subtitle: Option<String>,
    pub rsvp_message: Option<String>,
    pub rsvp_hosts: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of the RSVP section, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRsvp {
    pub rsvp_title: Option<String>,
    pub rsvp_subtitle: Option<String>,
    pub rsvp_message: Option<String>,
    pub rsvp_hosts: Option<String>,
}

/// A row from the `invitation_rsvp_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RsvpResponse {
    pub id: DbId,
    pub invitation_id: DbId,
    pub guest_name: String,
    pub phone: Option<String>,
    pub attendance: String,
    pub pax: i16,
    pub note: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a guest RSVP response.
#[derive(Debug, Clone)]
pub struct CreateRsvpResponse {
    pub guest_name: String,
    pub phone: Option<String>,
    pub attendance: String,
    pub pax: i16,
    pub note: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
