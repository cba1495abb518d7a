//! Wizard prefill state.
//!
//! The edit wizard re-opens on a saved invitation; this builds the flat
//! form document from the loaded aggregate, the reverse of a submission.
//! Locally stored media echo their storage path back into the upload
//! widgets; external-URL assets are not editable through the wizard and
//! echo nothing.

use serde_json::{json, Map, Value};
use undangan_core::types::DbId;
use undangan_db::models::aggregate::InvitationAggregate;
use undangan_db::models::asset::storage;
use undangan_db::models::person::Person;

/// The storage path of a locally stored asset, if the reference resolves.
fn local_path(aggregate: &InvitationAggregate, asset_id: Option<DbId>) -> Value {
    aggregate
        .asset(asset_id)
        .filter(|a| a.storage == storage::LOCAL)
        .and_then(|a| a.path.clone())
        .map(Value::from)
        .unwrap_or(Value::Null)
}

fn person_fields(state: &mut Map<String, Value>, prefix: &str, person: Option<&Person>) {
    let field = |suffix: &str| format!("{prefix}_{suffix}");
    state.insert(field("name"), json!(person.and_then(|p| p.name.clone())));
    state.insert(field("title"), json!(person.and_then(|p| p.title.clone())));
    state.insert(
        field("father_name"),
        json!(person.and_then(|p| p.father_name.clone())),
    );
    state.insert(
        field("mother_name"),
        json!(person.and_then(|p| p.mother_name.clone())),
    );
    state.insert(
        field("instagram_handle"),
        json!(person.and_then(|p| p.instagram_handle.clone())),
    );
}

/// Build the wizard prefill document for an invitation.
pub fn form_state(aggregate: &InvitationAggregate) -> Value {
    let invitation = &aggregate.invitation;
    let couple = aggregate.couple.as_ref();
    let mut state = Map::new();

    state.insert("template_id".into(), json!(invitation.template_id));
    state.insert("slug".into(), json!(invitation.slug));
    state.insert("title".into(), json!(invitation.title));
    state.insert("timezone".into(), json!(invitation.timezone));
    state.insert("locale".into(), json!(invitation.locale));
    state.insert("status".into(), json!(invitation.status));

    state.insert(
        "couple_tagline".into(),
        json!(couple.and_then(|c| c.couple_tagline.clone())),
    );
    state.insert(
        "couple_name_1".into(),
        json!(couple.and_then(|c| c.couple_name_1.clone())),
    );
    state.insert(
        "couple_name_2".into(),
        json!(couple.and_then(|c| c.couple_name_2.clone())),
    );
    state.insert(
        "wedding_date_display".into(),
        json!(couple.and_then(|c| c.wedding_date_display.clone())),
    );
    state.insert(
        "couple_image".into(),
        local_path(aggregate, couple.and_then(|c| c.couple_image_asset_id)),
    );

    person_fields(&mut state, "bride", aggregate.bride());
    state.insert(
        "bride_photo".into(),
        local_path(aggregate, aggregate.bride().and_then(|p| p.photo_asset_id)),
    );
    person_fields(&mut state, "groom", aggregate.groom());
    state.insert(
        "groom_photo".into(),
        local_path(aggregate, aggregate.groom().and_then(|p| p.photo_asset_id)),
    );

    state.insert(
        "section_title".into(),
        json!(aggregate.event_section.as_ref().and_then(|s| s.section_title.clone())),
    );
    state.insert(
        "default_location_url".into(),
        json!(aggregate
            .event_section
            .as_ref()
            .and_then(|s| s.default_location_url.clone())),
    );
    state.insert(
        "events".into(),
        json!(aggregate
            .events
            .iter()
            .map(|e| {
                json!({
                    "id": e.id,
                    "title": e.title,
                    "event_date_display": e.event_date_display,
                    "event_time_display": e.event_time_display,
                    "event_date": e.event_date,
                    "start_time": e.start_time,
                    "end_time": e.end_time,
                    "location_text": e.location_text,
                    "location_url": e.location_url,
                })
            })
            .collect::<Vec<_>>()),
    );

    if let Some(map) = aggregate.map.as_ref() {
        state.insert("map_section_title".into(), json!(map.map_section_title));
        state.insert("map_address".into(), json!(map.map_address));
        state.insert("map_embed_src".into(), json!(map.map_embed_src));
        state.insert("map_location_url".into(), json!(map.map_location_url));
    }
    if let Some(rsvp) = aggregate.rsvp.as_ref() {
        state.insert("rsvp_title".into(), json!(rsvp.rsvp_title));
        state.insert("rsvp_subtitle".into(), json!(rsvp.rsvp_subtitle));
        state.insert("rsvp_message".into(), json!(rsvp.rsvp_message));
        state.insert("rsvp_hosts".into(), json!(rsvp.rsvp_hosts));
    }
    if let Some(gift) = aggregate.gift_section.as_ref() {
        state.insert("gift_title".into(), json!(gift.gift_title));
        state.insert("gift_subtitle".into(), json!(gift.gift_subtitle));
    }
    if let Some(wish) = aggregate.wish_section.as_ref() {
        state.insert("wish_title".into(), json!(wish.wish_title));
    }
    if let Some(music) = aggregate.music.as_ref() {
        state.insert("autoplay".into(), json!(music.autoplay));
        state.insert("loop_audio".into(), json!(music.loop_audio));
        state.insert(
            "music_audio".into(),
            local_path(aggregate, music.audio_asset_id),
        );
    }

    state.insert(
        "gallery_items".into(),
        json!(aggregate
            .gallery_items
            .iter()
            .map(|item| {
                json!({
                    "id": item.id,
                    "image": local_path(aggregate, Some(item.image_asset_id)),
                })
            })
            .collect::<Vec<_>>()),
    );

    state.insert(
        "gift_accounts".into(),
        json!(aggregate
            .gift_accounts
            .iter()
            .map(|account| {
                json!({
                    "id": account.id,
                    "bank_name": account.bank_name,
                    "account_number": account.account_number,
                    "account_holder": account.account_holder,
                    "qr_image": local_path(aggregate, account.qr_asset_id),
                })
            })
            .collect::<Vec<_>>()),
    );

    state.insert(
        "wish_samples".into(),
        json!(aggregate
            .wish_samples
            .iter()
            .map(|sample| {
                json!({
                    "id": sample.id,
                    "name": sample.name,
                    "address": sample.address,
                    "message": sample.message,
                })
            })
            .collect::<Vec<_>>()),
    );

    Value::Object(state)
}
