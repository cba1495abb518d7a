//! The fully loaded invitation aggregate: the invitation row plus every
//! owned child record and asset, treated as one consistency boundary for
//! rendering and reconciliation.

use std::collections::HashMap;

use serde::Serialize;
use undangan_core::types::DbId;

use crate::models::asset::Asset;
use crate::models::couple::Couple;
use crate::models::event::{Event, EventSection};
use crate::models::gallery::GalleryItem;
use crate::models::gift::{GiftAccount, GiftSection};
use crate::models::guestbook::GuestbookEntry;
use crate::models::invitation::Invitation;
use crate::models::map::MapSection;
use crate::models::music::Music;
use crate::models::person::{self, Person};
use crate::models::rsvp::Rsvp;
use crate::models::template::Template;
use crate::models::wish::{WishSample, WishSection};

/// An invitation with all children eagerly loaded.
///
/// Ordered collections arrive sorted by `sort_order`; guestbook entries
/// arrive most recent first. Asset references on children resolve through
/// [`InvitationAggregate::asset`].
#[derive(Debug, Clone, Serialize)]
pub struct InvitationAggregate {
    pub invitation: Invitation,
    pub template: Option<Template>,
    pub couple: Option<Couple>,
    pub people: Vec<Person>,
    pub event_section: Option<EventSection>,
    pub events: Vec<Event>,
    pub gallery_items: Vec<GalleryItem>,
    pub map: Option<MapSection>,
    pub rsvp: Option<Rsvp>,
    pub gift_section: Option<GiftSection>,
    pub gift_accounts: Vec<GiftAccount>,
    pub wish_section: Option<WishSection>,
    pub wish_samples: Vec<WishSample>,
    pub guestbook_entries: Vec<GuestbookEntry>,
    pub music: Option<Music>,
    /// Every asset scoped to this invitation, keyed by id.
    pub assets: HashMap<DbId, Asset>,
}

impl InvitationAggregate {
    pub fn bride(&self) -> Option<&Person> {
        self.people.iter().find(|p| p.role == person::role::BRIDE)
    }

    pub fn groom(&self) -> Option<&Person> {
        self.people.iter().find(|p| p.role == person::role::GROOM)
    }

    /// Resolve an optional asset foreign key against the loaded asset map.
    pub fn asset(&self, id: Option<DbId>) -> Option<&Asset> {
        id.and_then(|id| self.assets.get(&id))
    }
}
