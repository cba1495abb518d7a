//! HTTP-level tests for guest RSVP and guestbook submissions: published-only
//! resolution, field validation, the honeypot, and storage semantics.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use undangan_db::models::invitation::CreateInvitation;
use undangan_db::repositories::{GuestbookRepo, InvitationRepo, RsvpResponseRepo, TemplateRepo};

async fn seed_invitation(pool: &PgPool, slug: &str, status: &str) -> i64 {
    let template = TemplateRepo::find_by_code(pool, "template-1")
        .await
        .unwrap()
        .unwrap();
    let invitation = InvitationRepo::create(
        pool,
        &CreateInvitation {
            template_id: template.id,
            slug: slug.to_string(),
            title: None,
            timezone: None,
            locale: None,
            status: Some(status.to_string()),
        },
    )
    .await
    .unwrap();
    InvitationRepo::ensure_defaults(pool, invitation.id)
        .await
        .unwrap();
    invitation.id
}

fn valid_rsvp() -> serde_json::Value {
    json!({
        "guest_name": "Budi",
        "attendance": "yes",
        "pax": 2
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rsvp_to_unknown_slug_is_404_and_stores_nothing(pool: PgPool) {
    seed_invitation(&pool, "known", "published").await;
    let app = build_test_app(pool.clone());

    let response = post_json(app, "/inv/unknown-slug/rsvp", valid_rsvp()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invitation_rsvp_responses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rsvp_to_draft_invitation_is_404(pool: PgPool) {
    seed_invitation(&pool, "draft-only", "draft").await;
    let app = build_test_app(pool);

    let response = post_json(app, "/inv/draft-only/rsvp", valid_rsvp()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rsvp_pax_out_of_range_is_rejected(pool: PgPool) {
    let id = seed_invitation(&pool, "party", "published").await;
    let app = build_test_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/inv/party/rsvp",
        json!({"guest_name": "Budi", "attendance": "yes", "pax": 11}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    assert_eq!(
        RsvpResponseRepo::count_for_invitation(&pool, id).await.unwrap(),
        0,
        "rejected submission must not create a row"
    );

    // A valid pax is stored verbatim.
    let response = post_json(
        app,
        "/inv/party/rsvp",
        json!({"guest_name": "Budi", "attendance": "maybe", "pax": 5, "note": "datang sore"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let rows = RsvpResponseRepo::list_for_invitation(&pool, id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pax, 5);
    assert_eq!(rows[0].attendance, "maybe");
    assert_eq!(rows[0].note.as_deref(), Some("datang sore"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rsvp_rejects_bad_attendance_and_missing_name(pool: PgPool) {
    seed_invitation(&pool, "strict", "published").await;
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/inv/strict/rsvp",
        json!({"guest_name": "Budi", "attendance": "definitely", "pax": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(
        app,
        "/inv/strict/rsvp",
        json!({"guest_name": "", "attendance": "yes", "pax": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn honeypot_content_fails_validation(pool: PgPool) {
    let id = seed_invitation(&pool, "trap", "published").await;
    let app = build_test_app(pool.clone());

    let response = post_json(
        app,
        "/inv/trap/rsvp",
        json!({"guest_name": "Bot", "attendance": "yes", "pax": 1, "website": "spam.example"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        RsvpResponseRepo::count_for_invitation(&pool, id).await.unwrap(),
        0
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn guestbook_entry_defaults_attendance_to_unknown(pool: PgPool) {
    let id = seed_invitation(&pool, "wishes", "published").await;
    let app = build_test_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/inv/wishes/guestbook",
        json!({"guest_name": "Sari", "message": "Selamat menempuh hidup baru!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app,
        "/inv/wishes/guestbook",
        json!({
            "guest_name": "Budi",
            "guest_address": "Bandung",
            "message": "Bahagia selalu",
            "attendance": "yes"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let entries = GuestbookRepo::list_for_invitation(&pool, id).await.unwrap();
    assert_eq!(entries.len(), 2);
    // Most recent first.
    assert_eq!(entries[0].guest_name, "Budi");
    assert_eq!(entries[0].attendance, "yes");
    assert_eq!(entries[1].guest_name, "Sari");
    assert_eq!(entries[1].attendance, "unknown");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn guestbook_requires_message(pool: PgPool) {
    seed_invitation(&pool, "quiet", "published").await;
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/inv/quiet/guestbook",
        json!({"guest_name": "Sari", "message": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// New guestbook entries show up in the rendered wishes section even when
/// the payload was cached before the entry landed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn guestbook_entries_flow_into_the_render_payload(pool: PgPool) {
    seed_invitation(&pool, "full-loop", "published").await;
    let app = build_test_app(pool);

    // Warm the cache first.
    let json = body_json(get(app.clone(), "/inv/full-loop").await).await;
    assert!(json["data"]["dto"]["wishes"]["guestbook"]
        .as_array()
        .unwrap()
        .is_empty());

    post_json(
        app.clone(),
        "/inv/full-loop/guestbook",
        json!({"guest_name": "Sari", "message": "Selamat!"}),
    )
    .await;

    let json = body_json(get(app, "/inv/full-loop").await).await;
    let guestbook = json["data"]["dto"]["wishes"]["guestbook"].as_array().unwrap();
    assert_eq!(guestbook.len(), 1);
    assert_eq!(guestbook[0]["name"], "Sari");
    assert_eq!(guestbook[0]["attendance"], "unknown");
}
