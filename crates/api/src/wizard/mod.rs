//! The wizard save pipeline: typed submission persistence, asset
//! reconciliation against the raw widget state, and the explicit
//! invitation lifecycle (create / save / delete) with cache invalidation.

pub mod form;
pub mod reconcile;
pub mod service;
pub mod submission;

pub use reconcile::AssetReconciler;
pub use service::InvitationService;
pub use submission::WizardSubmission;
