//! Repository for the `invitations` table and the aggregate loader.

use std::collections::HashMap;

use sqlx::PgPool;
use undangan_core::types::DbId;

use crate::models::aggregate::InvitationAggregate;
use crate::models::invitation::{CreateInvitation, Invitation, UpdateInvitation};
use crate::models::person;
use crate::repositories::{
    AssetRepo, CoupleRepo, EventRepo, EventSectionRepo, GalleryRepo, GiftAccountRepo,
    GiftSectionRepo, GuestbookRepo, MapRepo, MusicRepo, PersonRepo, RsvpRepo, TemplateRepo,
    WishSampleRepo, WishSectionRepo,
};

const COLUMNS: &str =
    "id, template_id, slug, title, timezone, locale, status, created_at, updated_at";

/// Provides CRUD operations and aggregate loading for invitations.
pub struct InvitationRepo;

impl InvitationRepo {
    /// Insert a new invitation. Timezone, locale, and status fall back to
    /// the column defaults when omitted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInvitation,
    ) -> Result<Invitation, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitations (template_id, slug, title, timezone, locale, status)
             VALUES ($1, $2, $3,
                     COALESCE($4, 'Asia/Jakarta'),
                     COALESCE($5, 'id_ID'),
                     COALESCE($6, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(input.template_id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.timezone)
            .bind(&input.locale)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an invitation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invitation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invitations WHERE id = $1");
        sqlx::query_as::<_, Invitation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an invitation by slug, restricted to an allowed status set.
    ///
    /// The public route passes `["published"]`, the preview route
    /// `["draft", "published"]`.
    pub async fn find_by_slug_in_statuses(
        pool: &PgPool,
        slug: &str,
        statuses: &[&str],
    ) -> Result<Option<Invitation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM invitations WHERE slug = $1 AND status = ANY($2)");
        sqlx::query_as::<_, Invitation>(&query)
            .bind(slug)
            .bind(statuses)
            .fetch_optional(pool)
            .await
    }

    /// Update an invitation. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvitation,
    ) -> Result<Option<Invitation>, sqlx::Error> {
        let query = format!(
            "UPDATE invitations SET
                template_id = COALESCE($2, template_id),
                slug = COALESCE($3, slug),
                title = COALESCE($4, title),
                timezone = COALESCE($5, timezone),
                locale = COALESCE($6, locale),
                status = COALESCE($7, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(id)
            .bind(input.template_id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.timezone)
            .bind(&input.locale)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invitation. Children and assets go with it via cascade.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invitations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Idempotently create the 1:1 child rows and the bride/groom rows.
    ///
    /// Safe to call on every render; every statement is a no-op once the
    /// row exists.
    pub async fn ensure_defaults(pool: &PgPool, invitation_id: DbId) -> Result<(), sqlx::Error> {
        for table in [
            "invitation_couple",
            "invitation_event_section",
            "invitation_map",
            "invitation_rsvp",
            "invitation_gift_section",
            "invitation_wish_section",
            "invitation_music",
        ] {
            let query = format!(
                "INSERT INTO {table} (invitation_id) VALUES ($1) ON CONFLICT DO NOTHING"
            );
            sqlx::query(&query).bind(invitation_id).execute(pool).await?;
        }

        for role in [person::role::BRIDE, person::role::GROOM] {
            sqlx::query(
                "INSERT INTO invitation_people (invitation_id, role) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(invitation_id)
            .bind(role)
            .execute(pool)
            .await?;
        }

        tracing::debug!(invitation_id, "Ensured default child rows");
        Ok(())
    }

    /// Load an invitation's full aggregate: every child collection and all
    /// scoped assets.
    pub async fn load_aggregate(
        pool: &PgPool,
        invitation: Invitation,
    ) -> Result<InvitationAggregate, sqlx::Error> {
        let id = invitation.id;

        let template = TemplateRepo::find_by_id(pool, invitation.template_id).await?;
        let couple = CoupleRepo::find(pool, id).await?;
        let people = PersonRepo::list_for_invitation(pool, id).await?;
        let event_section = EventSectionRepo::find(pool, id).await?;
        let events = EventRepo::list_for_invitation(pool, id).await?;
        let gallery_items = GalleryRepo::list_for_invitation(pool, id).await?;
        let map = MapRepo::find(pool, id).await?;
        let rsvp = RsvpRepo::find(pool, id).await?;
        let gift_section = GiftSectionRepo::find(pool, id).await?;
        let gift_accounts = GiftAccountRepo::list_for_invitation(pool, id).await?;
        let wish_section = WishSectionRepo::find(pool, id).await?;
        let wish_samples = WishSampleRepo::list_for_invitation(pool, id).await?;
        let guestbook_entries = GuestbookRepo::list_for_invitation(pool, id).await?;
        let music = MusicRepo::find(pool, id).await?;

        let assets: HashMap<DbId, _> = AssetRepo::list_for_invitation(pool, id)
            .await?
            .into_iter()
            .map(|asset| (asset.id, asset))
            .collect();

        Ok(InvitationAggregate {
            invitation,
            template,
            couple,
            people,
            event_section,
            events,
            gallery_items,
            map,
            rsvp,
            gift_section,
            gift_accounts,
            wish_section,
            wish_samples,
            guestbook_entries,
            music,
            assets,
        })
    }
}
