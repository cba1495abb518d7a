//! The template renderer: status-scoped loading, completeness checks,
//! view resolution, and the cached/uncached payload paths.

use std::sync::Arc;

use serde::Serialize;
use undangan_core::error::CoreError;
use undangan_core::template;
use undangan_db::models::aggregate::InvitationAggregate;
use undangan_db::models::invitation::{status, Invitation};
use undangan_db::repositories::InvitationRepo;
use undangan_db::DbPool;

use crate::cache::{CachedPayload, PayloadCache};
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::render::payload::{build_dto, build_field_map, FieldMap, InvitationDto};
use crate::state::AppState;

/// The payload handed to a template view.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedInvitation {
    /// Resolved view identifier, e.g. `templates.template-1`.
    pub view: String,
    pub dto: InvitationDto,
    pub fields: FieldMap,
}

/// Builds render payloads for invitations.
pub struct TemplateRenderer {
    pool: DbPool,
    cache: PayloadCache,
    config: Arc<ServerConfig>,
}

impl TemplateRenderer {
    pub fn new(state: &AppState) -> Self {
        Self {
            pool: state.pool.clone(),
            cache: state.payload_cache.clone(),
            config: Arc::clone(&state.config),
        }
    }

    /// Render for the public route: published invitations only, cached.
    pub async fn render_public_by_slug(&self, slug: &str) -> AppResult<RenderedInvitation> {
        self.render_by_slug_with_statuses(slug, &[status::PUBLISHED], true)
            .await
    }

    /// Render for the preview route: draft or published, never cached.
    pub async fn render_preview_by_slug(&self, slug: &str) -> AppResult<RenderedInvitation> {
        self.render_by_slug_with_statuses(slug, &[status::DRAFT, status::PUBLISHED], false)
            .await
    }

    /// Shared load/render path for the status-scoped entrypoints.
    pub async fn render_by_slug_with_statuses(
        &self,
        slug: &str,
        statuses: &[&str],
        use_cache: bool,
    ) -> AppResult<RenderedInvitation> {
        let invitation = self.load_by_slug_in_statuses(slug, statuses).await?;
        self.render_invitation(invitation, use_cache).await
    }

    /// Find an invitation by slug within an allowed status set, or fail
    /// with a not-found error.
    pub async fn load_by_slug_in_statuses(
        &self,
        slug: &str,
        statuses: &[&str],
    ) -> AppResult<Invitation> {
        InvitationRepo::find_by_slug_in_statuses(&self.pool, slug, statuses)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundMsg(format!(
                    "Invitation not found for slug: {slug}"
                )))
            })
    }

    /// Render a loaded invitation.
    ///
    /// Ensures default child rows, checks template completeness, resolves
    /// the view, and builds (or fetches) the payload.
    pub async fn render_invitation(
        &self,
        invitation: Invitation,
        use_cache: bool,
    ) -> AppResult<RenderedInvitation> {
        InvitationRepo::ensure_defaults(&self.pool, invitation.id).await?;
        let aggregate = InvitationRepo::load_aggregate(&self.pool, invitation).await?;

        self.validate_for_template(&aggregate, self.config.template_validation_enforce)?;
        let view = Self::resolve_view(&aggregate)?;

        let id = aggregate.invitation.id;
        let payload = if use_cache {
            match self.cache.get(id).await {
                Some(hit) => hit,
                None => {
                    let built = self.build_payload(&aggregate);
                    self.cache.insert(id, built).await
                }
            }
        } else {
            Arc::new(self.build_payload(&aggregate))
        };

        Ok(RenderedInvitation {
            view,
            dto: payload.dto.clone(),
            fields: payload.fields.clone(),
        })
    }

    fn build_payload(&self, aggregate: &InvitationAggregate) -> CachedPayload {
        let base = &self.config.public_storage_base_url;
        CachedPayload {
            dto: build_dto(aggregate, base),
            fields: build_field_map(aggregate, base),
        }
    }

    /// Map the invitation's template code to a view identifier.
    ///
    /// A missing template assignment or a code without a shipped view is a
    /// user-facing not-found, never a silent fallback.
    pub fn resolve_view(aggregate: &InvitationAggregate) -> Result<String, AppError> {
        let code = aggregate
            .template
            .as_ref()
            .map(|t| t.code.as_str())
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundMsg("Invitation template not set.".into()))
            })?;

        let view = template::view_name(code);
        if !template::view_exists(&view) {
            return Err(AppError::Core(CoreError::NotFoundMsg(format!(
                "Template view not found: {view}"
            ))));
        }
        Ok(view)
    }

    /// Check the template's required relations against the loaded
    /// aggregate.
    ///
    /// With `enforce` off the gaps are logged and rendering proceeds; with
    /// it on a non-empty gap list fails the render with a validation
    /// error.
    pub fn validate_for_template(
        &self,
        aggregate: &InvitationAggregate,
        enforce: bool,
    ) -> Result<(), AppError> {
        let missing = Self::missing_relations(aggregate);
        if missing.is_empty() {
            return Ok(());
        }

        if enforce {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invitation data incomplete: {}",
                missing.join(", ")
            ))));
        }

        tracing::warn!(
            invitation_id = aggregate.invitation.id,
            missing = missing.join(", "),
            "Invitation is missing relations its template requires"
        );
        Ok(())
    }

    /// The template-required relations absent from the aggregate. Empty
    /// collections count as absent; an unregistered template has no rules.
    pub fn missing_relations(aggregate: &InvitationAggregate) -> Vec<&'static str> {
        let Some(code) = aggregate.template.as_ref().map(|t| t.code.as_str()) else {
            return Vec::new();
        };
        let Some(required) = template::required_relations(code) else {
            return Vec::new();
        };

        required
            .iter()
            .copied()
            .filter(|rel| match *rel {
                "couple" => aggregate.couple.is_none(),
                "people" => aggregate.people.is_empty(),
                "event_section" => aggregate.event_section.is_none(),
                "events" => aggregate.events.is_empty(),
                "gallery_items" => aggregate.gallery_items.is_empty(),
                "map" => aggregate.map.is_none(),
                "rsvp" => aggregate.rsvp.is_none(),
                "gift_section" => aggregate.gift_section.is_none(),
                "gift_accounts" => aggregate.gift_accounts.is_empty(),
                "music" => aggregate.music.is_none(),
                _ => false,
            })
            .collect()
    }
}
