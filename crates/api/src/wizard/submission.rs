//! The typed portion of a wizard submission.
//!
//! The wizard posts one flat JSON document. [`WizardSubmission`] carries
//! the fields that persist to the invitation row and its children; the
//! transient media values (`couple_image`, `bride_photo`, `groom_photo`,
//! `music_audio`, and the `image`/`qr_image` keys of repeatable rows)
//! deliberately have no field here; they never reach the row updates and
//! are consumed from the raw document by the asset reconciler instead.

use serde::Deserialize;
use undangan_core::error::CoreError;
use undangan_core::types::DbId;
use undangan_db::models::couple::UpdateCouple;
use undangan_db::models::event::{UpdateEventSection, UpsertEvent};
use undangan_db::models::gift::{UpdateGiftSection, UpsertGiftAccount};
use undangan_db::models::invitation::{CreateInvitation, UpdateInvitation};
use undangan_db::models::map::UpdateMapSection;
use undangan_db::models::music::UpdateMusic;
use undangan_db::models::person::UpdatePersonProfile;
use undangan_db::models::rsvp::UpdateRsvp;
use undangan_db::models::wish::{UpdateWishSection, UpsertWishSample};

/// Raw-state keys the reconciler consumes.
pub mod raw_keys {
    pub const COUPLE_IMAGE: &str = "couple_image";
    pub const BRIDE_PHOTO: &str = "bride_photo";
    pub const GROOM_PHOTO: &str = "groom_photo";
    pub const MUSIC_AUDIO: &str = "music_audio";
    pub const GALLERY_ITEMS: &str = "gallery_items";
    pub const GIFT_ACCOUNTS: &str = "gift_accounts";
    pub const ROW_ID: &str = "id";
    pub const ROW_IMAGE: &str = "image";
    pub const ROW_QR_IMAGE: &str = "qr_image";
}

/// Everything the wizard submits apart from media values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WizardSubmission {
    // Invitation attributes
    pub template_id: Option<DbId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub timezone: Option<String>,
    pub locale: Option<String>,
    pub status: Option<String>,

    // Couple section
    pub couple_tagline: Option<String>,
    pub couple_name_1: Option<String>,
    pub couple_name_2: Option<String>,
    pub wedding_date_display: Option<String>,

    // People
    pub bride_name: Option<String>,
    pub bride_title: Option<String>,
    pub bride_father_name: Option<String>,
    pub bride_mother_name: Option<String>,
    pub bride_instagram_handle: Option<String>,
    pub groom_name: Option<String>,
    pub groom_title: Option<String>,
    pub groom_father_name: Option<String>,
    pub groom_mother_name: Option<String>,
    pub groom_instagram_handle: Option<String>,

    // Event section + rows
    pub section_title: Option<String>,
    pub default_location_url: Option<String>,
    pub events: Vec<UpsertEvent>,

    // Map section
    pub map_section_title: Option<String>,
    pub map_address: Option<String>,
    pub map_embed_src: Option<String>,
    pub map_location_url: Option<String>,

    // RSVP section text
    pub rsvp_title: Option<String>,
    pub rsvp_subtitle: Option<String>,
    pub rsvp_message: Option<String>,
    pub rsvp_hosts: Option<String>,

    // Gifts
    pub gift_title: Option<String>,
    pub gift_subtitle: Option<String>,
    pub gift_accounts: Vec<UpsertGiftAccount>,

    // Wishes
    pub wish_title: Option<String>,
    pub wish_samples: Vec<UpsertWishSample>,

    // Music playback flags
    pub autoplay: Option<bool>,
    pub loop_audio: Option<bool>,
}

impl WizardSubmission {
    /// The invitation-row insert this submission describes. Template and
    /// slug are mandatory on create.
    pub fn as_create(&self) -> Result<CreateInvitation, CoreError> {
        let template_id = self
            .template_id
            .ok_or_else(|| CoreError::Validation("template_id is required".into()))?;
        let slug = self
            .slug
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| CoreError::Validation("slug is required".into()))?;

        Ok(CreateInvitation {
            template_id,
            slug,
            title: self.title.clone(),
            timezone: self.timezone.clone(),
            locale: self.locale.clone(),
            status: self.status.clone(),
        })
    }

    /// The invitation-row update this submission describes.
    pub fn as_update(&self) -> UpdateInvitation {
        UpdateInvitation {
            template_id: self.template_id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            timezone: self.timezone.clone(),
            locale: self.locale.clone(),
            status: self.status.clone(),
        }
    }

    pub fn couple_fields(&self) -> UpdateCouple {
        UpdateCouple {
            couple_tagline: self.couple_tagline.clone(),
            couple_name_1: self.couple_name_1.clone(),
            couple_name_2: self.couple_name_2.clone(),
            wedding_date_display: self.wedding_date_display.clone(),
        }
    }

    pub fn bride_profile(&self) -> UpdatePersonProfile {
        UpdatePersonProfile {
            name: self.bride_name.clone(),
            title: self.bride_title.clone(),
            father_name: self.bride_father_name.clone(),
            mother_name: self.bride_mother_name.clone(),
            instagram_handle: self.bride_instagram_handle.clone(),
        }
    }

    pub fn groom_profile(&self) -> UpdatePersonProfile {
        UpdatePersonProfile {
            name: self.groom_name.clone(),
            title: self.groom_title.clone(),
            father_name: self.groom_father_name.clone(),
            mother_name: self.groom_mother_name.clone(),
            instagram_handle: self.groom_instagram_handle.clone(),
        }
    }

    pub fn event_section_fields(&self) -> UpdateEventSection {
        UpdateEventSection {
            section_title: self.section_title.clone(),
            default_location_url: self.default_location_url.clone(),
        }
    }

    pub fn map_fields(&self) -> UpdateMapSection {
        UpdateMapSection {
            map_section_title: self.map_section_title.clone(),
            map_address: self.map_address.clone(),
            map_embed_src: self.map_embed_src.clone(),
            map_location_url: self.map_location_url.clone(),
        }
    }

    pub fn rsvp_fields(&self) -> UpdateRsvp {
        UpdateRsvp {
            rsvp_title: self.rsvp_title.clone(),
            rsvp_subtitle: self.rsvp_subtitle.clone(),
            rsvp_message: self.rsvp_message.clone(),
            rsvp_hosts: self.rsvp_hosts.clone(),
        }
    }

    pub fn gift_section_fields(&self) -> UpdateGiftSection {
        UpdateGiftSection {
            gift_title: self.gift_title.clone(),
            gift_subtitle: self.gift_subtitle.clone(),
        }
    }

    pub fn wish_section_fields(&self) -> UpdateWishSection {
        UpdateWishSection {
            wish_title: self.wish_title.clone(),
        }
    }

    pub fn music_flags(&self) -> UpdateMusic {
        UpdateMusic {
            autoplay: self.autoplay,
            loop_audio: self.loop_audio,
        }
    }
}
