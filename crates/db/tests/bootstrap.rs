use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    undangan_db::health_check(&pool).await.unwrap();

    let tables = [
        "templates",
        "invitations",
        "assets",
        "invitation_couple",
        "invitation_people",
        "invitation_event_section",
        "invitation_events",
        "invitation_gallery_items",
        "invitation_map",
        "invitation_rsvp",
        "invitation_rsvp_responses",
        "invitation_gift_section",
        "invitation_gift_accounts",
        "invitation_wish_section",
        "invitation_wish_samples",
        "invitation_guestbook_entries",
        "invitation_music",
    ];

    // A missing table fails the query; empty tables are fine here.
    for table in tables {
        let _: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }
}

/// The one shipped template is seeded by the initial migration.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_template_seed_present(pool: PgPool) {
    let template = undangan_db::repositories::TemplateRepo::find_by_code(&pool, "template-1")
        .await
        .unwrap()
        .expect("template-1 should be seeded");
    assert_eq!(template.code, "template-1");
}
