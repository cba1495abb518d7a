//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod couple_repo;
pub mod event_repo;
pub mod gallery_repo;
pub mod gift_repo;
pub mod guestbook_repo;
pub mod invitation_repo;
pub mod map_repo;
pub mod music_repo;
pub mod person_repo;
pub mod rsvp_repo;
pub mod template_repo;
pub mod wish_repo;

pub use asset_repo::AssetRepo;
pub use couple_repo::CoupleRepo;
pub use event_repo::{EventRepo, EventSectionRepo};
pub use gallery_repo::GalleryRepo;
pub use gift_repo::{GiftAccountRepo, GiftSectionRepo};
pub use guestbook_repo::GuestbookRepo;
pub use invitation_repo::InvitationRepo;
pub use map_repo::MapRepo;
pub use music_repo::MusicRepo;
pub use person_repo::PersonRepo;
pub use rsvp_repo::{RsvpRepo, RsvpResponseRepo};
pub use template_repo::TemplateRepo;
pub use wish_repo::{WishSampleRepo, WishSectionRepo};
