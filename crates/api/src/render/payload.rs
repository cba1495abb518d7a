//! The denormalized render payload.
//!
//! [`build_dto`] flattens a loaded invitation aggregate into the nested
//! structure the template view consumes; [`build_field_map`] derives the
//! flat key/value view kept for legacy consumers. Both resolve every media
//! reference to a public URL through the asset's own resolution rule;
//! raw storage paths never reach a payload.

use std::collections::BTreeMap;

use serde::Serialize;
use undangan_core::types::DbId;
use undangan_db::models::aggregate::InvitationAggregate;
use undangan_db::models::person::Person;

/// Guestbook entries shown on the invitation, newest first.
const GUESTBOOK_LIMIT: usize = 20;

/// Flat key/value view of the payload for simple consumers.
pub type FieldMap = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvitationDto {
    pub meta: MetaDto,
    pub couple: CoupleDto,
    pub bride: PersonDto,
    pub groom: PersonDto,
    pub event_section: EventSectionDto,
    pub events: Vec<EventDto>,
    pub gallery: Vec<GalleryImageDto>,
    pub map: MapDto,
    pub rsvp: RsvpDto,
    pub gifts: GiftsDto,
    pub wishes: WishesDto,
    pub music: MusicDto,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MetaDto {
    pub id: DbId,
    pub slug: String,
    pub title: Option<String>,
    pub timezone: String,
    pub locale: String,
    pub status: String,
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CoupleDto {
    pub tagline: Option<String>,
    pub name_1: Option<String>,
    pub name_2: Option<String>,
    pub date_display: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonDto {
    pub name: Option<String>,
    pub title: Option<String>,
    pub father: Option<String>,
    pub mother: Option<String>,
    pub instagram: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventSectionDto {
    pub title: Option<String>,
    pub default_location_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventDto {
    pub title: Option<String>,
    pub date_display: Option<String>,
    pub time_display: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location_text: Option<String>,
    pub location_url: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GalleryImageDto {
    pub sort_order: i32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MapDto {
    pub title: Option<String>,
    pub address: Option<String>,
    pub embed_src: Option<String>,
    pub location_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RsvpDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub message: Option<String>,
    pub hosts: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GiftsDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub accounts: Vec<GiftAccountDto>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GiftAccountDto {
    pub bank: Option<String>,
    pub number: Option<String>,
    pub holder: Option<String>,
    pub qr: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WishesDto {
    pub title: Option<String>,
    pub samples: Vec<WishSampleDto>,
    pub guestbook: Vec<GuestbookEntryDto>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WishSampleDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GuestbookEntryDto {
    pub name: String,
    pub address: Option<String>,
    pub message: String,
    pub attendance: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MusicDto {
    pub url: Option<String>,
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub loop_audio: bool,
}

impl Default for MusicDto {
    fn default() -> Self {
        Self {
            url: None,
            autoplay: true,
            loop_audio: true,
        }
    }
}

/// Resolve a child's asset reference to a public URL.
fn url_for(aggregate: &InvitationAggregate, asset_id: Option<DbId>, base: &str) -> Option<String> {
    aggregate.asset(asset_id).and_then(|a| a.public_url(base))
}

fn person_dto(
    aggregate: &InvitationAggregate,
    person: Option<&Person>,
    base: &str,
) -> PersonDto {
    let Some(person) = person else {
        return PersonDto::default();
    };
    PersonDto {
        name: person.name.clone(),
        title: person.title.clone(),
        father: person.father_name.clone(),
        mother: person.mother_name.clone(),
        instagram: person.instagram_handle.clone(),
        photo: url_for(aggregate, person.photo_asset_id, base),
    }
}

/// Build the nested render payload from a loaded aggregate.
pub fn build_dto(aggregate: &InvitationAggregate, public_base: &str) -> InvitationDto {
    let invitation = &aggregate.invitation;

    let mut events = aggregate.events.clone();
    events.sort_by_key(|e| e.sort_order);
    let mut gallery = aggregate.gallery_items.clone();
    gallery.sort_by_key(|g| g.sort_order);
    let mut accounts = aggregate.gift_accounts.clone();
    accounts.sort_by_key(|a| a.sort_order);
    let mut samples = aggregate.wish_samples.clone();
    samples.sort_by_key(|s| s.sort_order);

    InvitationDto {
        meta: MetaDto {
            id: invitation.id,
            slug: invitation.slug.clone(),
            title: invitation.title.clone(),
            timezone: invitation.timezone.clone(),
            locale: invitation.locale.clone(),
            status: invitation.status.clone(),
            template: aggregate.template.as_ref().map(|t| t.code.clone()),
        },
        couple: CoupleDto {
            tagline: aggregate.couple.as_ref().and_then(|c| c.couple_tagline.clone()),
            name_1: aggregate.couple.as_ref().and_then(|c| c.couple_name_1.clone()),
            name_2: aggregate.couple.as_ref().and_then(|c| c.couple_name_2.clone()),
            date_display: aggregate
                .couple
                .as_ref()
                .and_then(|c| c.wedding_date_display.clone()),
            image: url_for(
                aggregate,
                aggregate.couple.as_ref().and_then(|c| c.couple_image_asset_id),
                public_base,
            ),
        },
        bride: person_dto(aggregate, aggregate.bride(), public_base),
        groom: person_dto(aggregate, aggregate.groom(), public_base),
        event_section: EventSectionDto {
            title: aggregate
                .event_section
                .as_ref()
                .and_then(|s| s.section_title.clone()),
            default_location_url: aggregate
                .event_section
                .as_ref()
                .and_then(|s| s.default_location_url.clone()),
        },
        events: events
            .iter()
            .map(|e| EventDto {
                title: e.title.clone(),
                date_display: e.event_date_display.clone(),
                time_display: e.event_time_display.clone(),
                date: e.event_date.map(|d| d.to_string()),
                start_time: e.start_time.map(|t| t.to_string()),
                end_time: e.end_time.map(|t| t.to_string()),
                location_text: e.location_text.clone(),
                location_url: e.location_url.clone(),
                sort_order: e.sort_order,
            })
            .collect(),
        gallery: gallery
            .iter()
            .map(|g| GalleryImageDto {
                sort_order: g.sort_order,
                image: url_for(aggregate, Some(g.image_asset_id), public_base),
            })
            .collect(),
        map: MapDto {
            title: aggregate.map.as_ref().and_then(|m| m.map_section_title.clone()),
            address: aggregate.map.as_ref().and_then(|m| m.map_address.clone()),
            embed_src: aggregate.map.as_ref().and_then(|m| m.map_embed_src.clone()),
            location_url: aggregate.map.as_ref().and_then(|m| m.map_location_url.clone()),
        },
        rsvp: RsvpDto {
            title: aggregate.rsvp.as_ref().and_then(|r| r.rsvp_title.clone()),
            subtitle: aggregate.rsvp.as_ref().and_then(|r| r.rsvp_subtitle.clone()),
            message: aggregate.rsvp.as_ref().and_then(|r| r.rsvp_message.clone()),
            hosts: aggregate.rsvp.as_ref().and_then(|r| r.rsvp_hosts.clone()),
        },
        gifts: GiftsDto {
            title: aggregate.gift_section.as_ref().and_then(|g| g.gift_title.clone()),
            subtitle: aggregate
                .gift_section
                .as_ref()
                .and_then(|g| g.gift_subtitle.clone()),
            accounts: accounts
                .iter()
                .map(|a| GiftAccountDto {
                    bank: a.bank_name.clone(),
                    number: a.account_number.clone(),
                    holder: a.account_holder.clone(),
                    qr: url_for(aggregate, a.qr_asset_id, public_base),
                    sort_order: a.sort_order,
                })
                .collect(),
        },
        wishes: WishesDto {
            title: aggregate
                .wish_section
                .as_ref()
                .and_then(|w| w.wish_title.clone()),
            samples: samples
                .iter()
                .map(|s| WishSampleDto {
                    name: s.name.clone(),
                    address: s.address.clone(),
                    message: s.message.clone(),
                    sort_order: s.sort_order,
                })
                .collect(),
            guestbook: aggregate
                .guestbook_entries
                .iter()
                .take(GUESTBOOK_LIMIT)
                .map(|g| GuestbookEntryDto {
                    name: g.guest_name.clone(),
                    address: g.guest_address.clone(),
                    message: g.message.clone(),
                    attendance: g.attendance.clone(),
                    created_at: g.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                })
                .collect(),
        },
        music: MusicDto {
            url: url_for(
                aggregate,
                aggregate.music.as_ref().and_then(|m| m.audio_asset_id),
                public_base,
            ),
            autoplay: aggregate.music.as_ref().map(|m| m.autoplay).unwrap_or(true),
            loop_audio: aggregate.music.as_ref().map(|m| m.loop_audio).unwrap_or(true),
        },
    }
}

/// Build the flat field map from a loaded aggregate.
///
/// Independently derived from [`build_dto`] but must stay semantically
/// consistent with it.
pub fn build_field_map(aggregate: &InvitationAggregate, public_base: &str) -> FieldMap {
    let couple = aggregate.couple.as_ref();
    let bride = aggregate.bride();
    let groom = aggregate.groom();

    let mut fields = FieldMap::new();
    let mut put = |key: &str, value: Option<String>| {
        fields.insert(key.to_string(), value);
    };

    put("couple_tagline", couple.and_then(|c| c.couple_tagline.clone()));
    put("couple_name_1", couple.and_then(|c| c.couple_name_1.clone()));
    put("couple_name_2", couple.and_then(|c| c.couple_name_2.clone()));
    put("wedding_date", couple.and_then(|c| c.wedding_date_display.clone()));
    put(
        "couple_image",
        url_for(
            aggregate,
            couple.and_then(|c| c.couple_image_asset_id),
            public_base,
        ),
    );

    put("bride_name", bride.and_then(|p| p.name.clone()));
    put("bride_title", bride.and_then(|p| p.title.clone()));
    put("bride_father", bride.and_then(|p| p.father_name.clone()));
    put("bride_mother", bride.and_then(|p| p.mother_name.clone()));
    put("bride_ig", bride.and_then(|p| p.instagram_handle.clone()));
    put(
        "bride_photo",
        url_for(aggregate, bride.and_then(|p| p.photo_asset_id), public_base),
    );

    put("groom_name", groom.and_then(|p| p.name.clone()));
    put("groom_title", groom.and_then(|p| p.title.clone()));
    put("groom_father", groom.and_then(|p| p.father_name.clone()));
    put("groom_mother", groom.and_then(|p| p.mother_name.clone()));
    put("groom_ig", groom.and_then(|p| p.instagram_handle.clone()));
    put(
        "groom_photo",
        url_for(aggregate, groom.and_then(|p| p.photo_asset_id), public_base),
    );

    put(
        "event_section_title",
        aggregate.event_section.as_ref().and_then(|s| s.section_title.clone()),
    );
    put(
        "event_location_url",
        aggregate
            .event_section
            .as_ref()
            .and_then(|s| s.default_location_url.clone()),
    );

    put(
        "map_title",
        aggregate.map.as_ref().and_then(|m| m.map_section_title.clone()),
    );
    put("map_address", aggregate.map.as_ref().and_then(|m| m.map_address.clone()));
    put(
        "map_embed_src",
        aggregate.map.as_ref().and_then(|m| m.map_embed_src.clone()),
    );
    put(
        "map_location_url",
        aggregate.map.as_ref().and_then(|m| m.map_location_url.clone()),
    );

    put("rsvp_title", aggregate.rsvp.as_ref().and_then(|r| r.rsvp_title.clone()));
    put(
        "rsvp_subtitle",
        aggregate.rsvp.as_ref().and_then(|r| r.rsvp_subtitle.clone()),
    );
    put(
        "rsvp_message",
        aggregate.rsvp.as_ref().and_then(|r| r.rsvp_message.clone()),
    );
    put("rsvp_hosts", aggregate.rsvp.as_ref().and_then(|r| r.rsvp_hosts.clone()));

    put(
        "gift_title",
        aggregate.gift_section.as_ref().and_then(|g| g.gift_title.clone()),
    );
    put(
        "gift_subtitle",
        aggregate.gift_section.as_ref().and_then(|g| g.gift_subtitle.clone()),
    );

    put(
        "wish_title",
        aggregate.wish_section.as_ref().and_then(|w| w.wish_title.clone()),
    );

    put(
        "music_url",
        url_for(
            aggregate,
            aggregate.music.as_ref().and_then(|m| m.audio_asset_id),
            public_base,
        ),
    );

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use undangan_core::types::Timestamp;
    use undangan_db::models::asset::{category, kind, storage, Asset, PUBLIC_DISK};
    use undangan_db::models::gallery::GalleryItem;
    use undangan_db::models::guestbook::GuestbookEntry;
    use undangan_db::models::invitation::Invitation;
    use undangan_db::models::person::{role, Person};

    fn ts() -> Timestamp {
        chrono::Utc::now()
    }

    fn local_asset(id: i64, path: &str) -> Asset {
        Asset {
            id,
            invitation_id: Some(1),
            kind: kind::IMAGE.into(),
            category: category::GALLERY_IMAGE.into(),
            storage: storage::LOCAL.into(),
            url: None,
            disk: Some(PUBLIC_DISK.into()),
            path: Some(path.into()),
            mime: None,
            alt_text: None,
            meta: None,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn bare_aggregate() -> InvitationAggregate {
        InvitationAggregate {
            invitation: Invitation {
                id: 1,
                template_id: 1,
                slug: "alin-aldi".into(),
                title: Some("Alin & Aldi".into()),
                timezone: "Asia/Jakarta".into(),
                locale: "id_ID".into(),
                status: "draft".into(),
                created_at: ts(),
                updated_at: ts(),
            },
            template: None,
            couple: None,
            people: Vec::new(),
            event_section: None,
            events: Vec::new(),
            gallery_items: Vec::new(),
            map: None,
            rsvp: None,
            gift_section: None,
            gift_accounts: Vec::new(),
            wish_section: None,
            wish_samples: Vec::new(),
            guestbook_entries: Vec::new(),
            music: None,
            assets: HashMap::new(),
        }
    }

    #[test]
    fn missing_sections_degrade_to_empty_payload() {
        let dto = build_dto(&bare_aggregate(), "/storage");
        assert_eq!(dto.meta.slug, "alin-aldi");
        assert_eq!(dto.couple.tagline, None);
        assert_eq!(dto.bride.name, None);
        assert!(dto.events.is_empty());
        // Music flags default to true when the row has not been created.
        assert!(dto.music.autoplay);
        assert!(dto.music.loop_audio);
        assert_eq!(dto.music.url, None);
    }

    #[test]
    fn gallery_is_ordered_and_urls_resolved() {
        let mut aggregate = bare_aggregate();
        aggregate.assets.insert(10, local_asset(10, "g/one.jpg"));
        aggregate.assets.insert(11, local_asset(11, "g/two.jpg"));
        aggregate.gallery_items = vec![
            GalleryItem {
                id: 2,
                invitation_id: 1,
                sort_order: 2,
                image_asset_id: 11,
                created_at: ts(),
                updated_at: ts(),
            },
            GalleryItem {
                id: 1,
                invitation_id: 1,
                sort_order: 1,
                image_asset_id: 10,
                created_at: ts(),
                updated_at: ts(),
            },
        ];

        let dto = build_dto(&aggregate, "/storage");
        assert_eq!(dto.gallery.len(), 2);
        assert_eq!(dto.gallery[0].sort_order, 1);
        assert_eq!(dto.gallery[0].image.as_deref(), Some("/storage/g/one.jpg"));
        assert_eq!(dto.gallery[1].image.as_deref(), Some("/storage/g/two.jpg"));
    }

    #[test]
    fn guestbook_is_capped_at_twenty() {
        let mut aggregate = bare_aggregate();
        aggregate.guestbook_entries = (0..25)
            .map(|i| GuestbookEntry {
                id: i,
                invitation_id: 1,
                guest_name: format!("Guest {i}"),
                guest_address: None,
                message: "congrats".into(),
                attendance: "unknown".into(),
                ip_address: None,
                user_agent: None,
                created_at: ts(),
                updated_at: ts(),
            })
            .collect();

        let dto = build_dto(&aggregate, "/storage");
        assert_eq!(dto.wishes.guestbook.len(), 20);
        assert_eq!(dto.wishes.guestbook[0].name, "Guest 0");
    }

    #[test]
    fn field_map_mirrors_dto_person_fields() {
        let mut aggregate = bare_aggregate();
        aggregate.people = vec![Person {
            id: 1,
            invitation_id: 1,
            role: role::BRIDE.into(),
            name: Some("Alin".into()),
            title: Some("S.Kom".into()),
            father_name: Some("Budi".into()),
            mother_name: Some("Sari".into()),
            instagram_handle: Some("alin.w".into()),
            photo_asset_id: Some(7),
            created_at: ts(),
            updated_at: ts(),
        }];
        aggregate.assets.insert(7, local_asset(7, "people/alin.jpg"));

        let dto = build_dto(&aggregate, "/storage");
        let fields = build_field_map(&aggregate, "/storage");

        assert_eq!(dto.bride.name.as_deref(), Some("Alin"));
        assert_eq!(fields["bride_name"].as_deref(), Some("Alin"));
        assert_eq!(fields["bride_ig"].as_deref(), Some("alin.w"));
        assert_eq!(
            fields["bride_photo"].as_deref(),
            Some("/storage/people/alin.jpg")
        );
        assert_eq!(dto.bride.photo, fields["bride_photo"]);
        assert!(fields["groom_name"].is_none());
    }

    #[test]
    fn external_asset_urls_pass_through() {
        let mut aggregate = bare_aggregate();
        let mut asset = local_asset(20, "unused.mp3");
        asset.storage = storage::URL.into();
        asset.url = Some("https://cdn.example/song.mp3".into());
        aggregate.assets.insert(20, asset);
        aggregate.music = Some(undangan_db::models::music::Music {
            invitation_id: 1,
            audio_asset_id: Some(20),
            autoplay: false,
            loop_audio: true,
            created_at: ts(),
            updated_at: ts(),
        });

        let dto = build_dto(&aggregate, "/storage");
        assert_eq!(dto.music.url.as_deref(), Some("https://cdn.example/song.mp3"));
        assert!(!dto.music.autoplay);
    }
}
