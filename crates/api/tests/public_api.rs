//! HTTP-level tests for the guest-facing render routes: status scoping,
//! not-found behavior, and cache invalidation on save/delete.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_config, delete, get, put_json, test_config};
use serde_json::json;
use sqlx::PgPool;
use undangan_db::models::invitation::CreateInvitation;
use undangan_db::repositories::{InvitationRepo, TemplateRepo};

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
            title: Some("Alin & Aldi".to_string()),
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

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_endpoint_responds(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_invitation_renders_publicly(pool: PgPool) {
    seed_invitation(&pool, "alin-aldi", "published").await;

    let app = build_test_app(pool);
    let response = get(app, "/inv/alin-aldi").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["view"], "templates.template-1");
    assert_eq!(data["dto"]["meta"]["slug"], "alin-aldi");
    assert_eq!(data["dto"]["meta"]["status"], "published");
    // Music flags default to true out of the box.
    assert_eq!(data["dto"]["music"]["autoplay"], true);
    assert_eq!(data["dto"]["music"]["loop"], true);
    assert_eq!(data["fields"]["couple_tagline"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_invitation_is_public_404_but_previewable(pool: PgPool) {
    seed_invitation(&pool, "draft-slug", "draft").await;
    let app = build_test_app(pool);

    let response = get(app.clone(), "/inv/draft-slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let response = get(app, "/preview/inv/draft-slug").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["dto"]["meta"]["status"], "draft");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_invitation_is_previewable_too(pool: PgPool) {
    seed_invitation(&pool, "both-ways", "published").await;
    let app = build_test_app(pool);

    assert_eq!(get(app.clone(), "/inv/both-ways").await.status(), StatusCode::OK);
    assert_eq!(
        get(app, "/preview/inv/both-ways").await.status(),
        StatusCode::OK
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_slug_is_404_everywhere(pool: PgPool) {
    let app = build_test_app(pool);
    assert_eq!(get(app.clone(), "/inv/nope").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        get(app, "/preview/inv/nope").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn archived_invitation_is_not_previewable(pool: PgPool) {
    seed_invitation(&pool, "old-slug", "archived").await;
    let app = build_test_app(pool);
    assert_eq!(get(app.clone(), "/inv/old-slug").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        get(app, "/preview/inv/old-slug").await.status(),
        StatusCode::NOT_FOUND
    );
}

/// A cached public render must never survive a save: the second read sees
/// the new title even though the first one populated the cache.
#[sqlx::test(migrations = "../../db/migrations")]
async fn save_invalidates_cached_public_payload(pool: PgPool) {
    let id = seed_invitation(&pool, "cache-slug", "published").await;
    let app = build_test_app(pool);

    let response = get(app.clone(), "/inv/cache-slug").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["dto"]["meta"]["title"], "Alin & Aldi");

    let response = put_json(
        app.clone(),
        &format!("/api/v1/invitations/{id}"),
        json!({ "title": "The Wedding of Alin & Aldi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/inv/cache-slug").await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["dto"]["meta"]["title"],
        "The Wedding of Alin & Aldi"
    );
}

/// The public path really does serve from the cache: a row update that
/// bypasses the lifecycle service is invisible to `/inv/{slug}` until the
/// TTL or an invalidation, while the uncached preview path sees it at
/// once.
#[sqlx::test(migrations = "../../db/migrations")]
async fn public_path_serves_from_cache_until_invalidated(pool: PgPool) {
    let id = seed_invitation(&pool, "stale-slug", "published").await;
    let app = build_test_app(pool.clone());

    let json = body_json(get(app.clone(), "/inv/stale-slug").await).await;
    assert_eq!(json["data"]["dto"]["meta"]["title"], "Alin & Aldi");

    // Mutate the row directly, without going through the service.
    sqlx::query("UPDATE invitations SET title = 'Changed Behind Cache' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let json = body_json(get(app.clone(), "/inv/stale-slug").await).await;
    assert_eq!(
        json["data"]["dto"]["meta"]["title"], "Alin & Aldi",
        "public path should still serve the cached payload"
    );

    let json = body_json(get(app, "/preview/inv/stale-slug").await).await;
    assert_eq!(json["data"]["dto"]["meta"]["title"], "Changed Behind Cache");
}

/// With enforcement on, an invitation missing relations its template
/// requires fails the render with 422 instead of degrading silently.
#[sqlx::test(migrations = "../../db/migrations")]
async fn enforced_template_validation_rejects_incomplete_invitations(pool: PgPool) {
    // Seeded invitations have default child rows but no events or gallery.
    seed_invitation(&pool, "incomplete", "published").await;

    let mut config = test_config();
    config.template_validation_enforce = true;
    let app = build_test_app_with_config(pool, config);

    let response = get(app, "/inv/incomplete").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_invalidates_and_404s(pool: PgPool) {
    let id = seed_invitation(&pool, "gone-slug", "published").await;
    let app = build_test_app(pool);

    assert_eq!(get(app.clone(), "/inv/gone-slug").await.status(), StatusCode::OK);

    let response = delete(app.clone(), &format!("/api/v1/invitations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        get(app, "/inv/gone-slug").await.status(),
        StatusCode::NOT_FOUND
    );
}
