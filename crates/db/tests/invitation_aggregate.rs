//! Repository-level tests for the invitation aggregate: default child
//! seeding, people uniqueness, asset upsert identity, and status-scoped
//! slug lookup.

use sqlx::PgPool;
use undangan_db::models::asset::{category, kind, PUBLIC_DISK};
use undangan_db::models::invitation::{status, CreateInvitation};
use undangan_db::models::person::role;
use undangan_db::repositories::{
    AssetRepo, CoupleRepo, InvitationRepo, MusicRepo, PersonRepo, TemplateRepo,
};

async fn new_invitation(pool: &PgPool, slug: &str, invitation_status: &str) -> i64 {
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
            status: Some(invitation_status.to_string()),
        },
    )
    .await
    .unwrap();
    invitation.id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ensure_defaults_is_idempotent(pool: PgPool) {
    let id = new_invitation(&pool, "defaults-test", status::DRAFT).await;

    InvitationRepo::ensure_defaults(&pool, id).await.unwrap();
    InvitationRepo::ensure_defaults(&pool, id).await.unwrap();

    let people = PersonRepo::list_for_invitation(&pool, id).await.unwrap();
    assert_eq!(people.len(), 2);
    assert!(people.iter().any(|p| p.role == role::BRIDE));
    assert!(people.iter().any(|p| p.role == role::GROOM));

    let couple = CoupleRepo::find(&pool, id).await.unwrap();
    assert!(couple.is_some());

    let music = MusicRepo::find(&pool, id).await.unwrap().unwrap();
    assert!(music.autoplay);
    assert!(music.loop_audio);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_person_role_is_rejected(pool: PgPool) {
    let id = new_invitation(&pool, "role-test", status::DRAFT).await;
    InvitationRepo::ensure_defaults(&pool, id).await.unwrap();

    let result = sqlx::query("INSERT INTO invitation_people (invitation_id, role) VALUES ($1, 'bride')")
        .bind(id)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "second bride row should violate uq_invitation_people_role");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn asset_upsert_reuses_row_and_overwrites_alt_text(pool: PgPool) {
    let id = new_invitation(&pool, "asset-test", status::DRAFT).await;

    let first = AssetRepo::upsert_local(
        &pool,
        id,
        category::SECTION_IMAGE,
        kind::IMAGE,
        PUBLIC_DISK,
        "invitations/x.jpg",
        "Couple Image",
    )
    .await
    .unwrap();

    let second = AssetRepo::upsert_local(
        &pool,
        id,
        category::SECTION_IMAGE,
        kind::IMAGE,
        PUBLIC_DISK,
        "invitations/x.jpg",
        "Different Alt",
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.alt_text.as_deref(), Some("Different Alt"));

    let all = AssetRepo::list_for_invitation(&pool, id).await.unwrap();
    assert_eq!(all.len(), 1);

    // A different path is a different identity.
    let third = AssetRepo::upsert_local(
        &pool,
        id,
        category::SECTION_IMAGE,
        kind::IMAGE,
        PUBLIC_DISK,
        "invitations/y.jpg",
        "Couple Image",
    )
    .await
    .unwrap();
    assert_ne!(first.id, third.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_lookup_respects_status_scope(pool: PgPool) {
    new_invitation(&pool, "draft-slug", status::DRAFT).await;
    new_invitation(&pool, "published-slug", status::PUBLISHED).await;

    let public_only = [status::PUBLISHED];
    let preview = [status::DRAFT, status::PUBLISHED];

    assert!(
        InvitationRepo::find_by_slug_in_statuses(&pool, "draft-slug", &public_only)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        InvitationRepo::find_by_slug_in_statuses(&pool, "draft-slug", &preview)
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        InvitationRepo::find_by_slug_in_statuses(&pool, "published-slug", &public_only)
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        InvitationRepo::find_by_slug_in_statuses(&pool, "missing-slug", &preview)
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_children_and_assets(pool: PgPool) {
    let id = new_invitation(&pool, "cascade-test", status::DRAFT).await;
    InvitationRepo::ensure_defaults(&pool, id).await.unwrap();
    AssetRepo::upsert_local(
        &pool,
        id,
        category::MUSIC,
        kind::AUDIO,
        PUBLIC_DISK,
        "music/song.mp3",
        "Invitation Music",
    )
    .await
    .unwrap();

    assert!(InvitationRepo::delete(&pool, id).await.unwrap());

    assert!(PersonRepo::list_for_invitation(&pool, id).await.unwrap().is_empty());
    assert!(AssetRepo::list_for_invitation(&pool, id).await.unwrap().is_empty());
    assert!(InvitationRepo::find_by_id(&pool, id).await.unwrap().is_none());
}
