//! Render pipeline: builds the template-agnostic payload for an
//! invitation and serves it through the cached (public) and uncached
//! (preview) paths.

pub mod payload;
pub mod renderer;

pub use payload::{build_dto, build_field_map, FieldMap, InvitationDto};
pub use renderer::{RenderedInvitation, TemplateRenderer};
