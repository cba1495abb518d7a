//! Asset entity model: one piece of media, either stored on a local disk
//! or referenced by external URL.

use serde::Serialize;
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// Storage modes. The mode determines which of `url` or `disk`/`path` is
/// authoritative.
pub mod storage {
    pub const URL: &str = "url";
    pub const LOCAL: &str = "local";
}

/// Media kinds.
pub mod kind {
    pub const IMAGE: &str = "image";
    pub const AUDIO: &str = "audio";
}

/// Asset categories (what the media is used for).
pub mod category {
    pub const SECTION_IMAGE: &str = "section_image";
    pub const GALLERY_IMAGE: &str = "gallery_image";
    pub const MUSIC: &str = "music";
    pub const OTHER: &str = "other";
}

/// The disk uploaded wizard media lands on.
pub const PUBLIC_DISK: &str = "public";

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub invitation_id: Option<DbId>,
    pub kind: String,
    pub category: String,
    pub storage: String,
    pub url: Option<String>,
    pub disk: Option<String>,
    pub path: Option<String>,
    pub mime: Option<String>,
    pub alt_text: Option<String>,
    pub meta: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Asset {
    /// Resolve a usable public URL regardless of storage mode.
    ///
    /// External assets return their stored URL verbatim; local assets are
    /// composed from the configured public base and the stored path. An
    /// asset with neither resolves to `None` and renders as "no media".
    pub fn public_url(&self, public_base: &str) -> Option<String> {
        match self.storage.as_str() {
            storage::URL => self.url.clone(),
            storage::LOCAL => match (self.disk.as_deref(), self.path.as_deref()) {
                (Some(_), Some(path)) => Some(format!(
                    "{}/{}",
                    public_base.trim_end_matches('/'),
                    path.trim_start_matches('/')
                )),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(storage_mode: &str, url: Option<&str>, disk: Option<&str>, path: Option<&str>) -> Asset {
        Asset {
            id: 1,
            invitation_id: Some(1),
            kind: kind::IMAGE.into(),
            category: category::SECTION_IMAGE.into(),
            storage: storage_mode.into(),
            url: url.map(Into::into),
            disk: disk.map(Into::into),
            path: path.map(Into::into),
            mime: None,
            alt_text: None,
            meta: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn external_url_is_returned_verbatim() {
        let a = asset(storage::URL, Some("https://cdn.example/x.jpg"), None, None);
        assert_eq!(a.public_url("/storage").as_deref(), Some("https://cdn.example/x.jpg"));
    }

    #[test]
    fn local_path_is_joined_to_public_base() {
        let a = asset(storage::LOCAL, None, Some(PUBLIC_DISK), Some("invitations/x.jpg"));
        assert_eq!(a.public_url("/storage").as_deref(), Some("/storage/invitations/x.jpg"));
        assert_eq!(a.public_url("/storage/").as_deref(), Some("/storage/invitations/x.jpg"));
    }

    #[test]
    fn incomplete_local_asset_has_no_url() {
        let a = asset(storage::LOCAL, None, None, Some("x.jpg"));
        assert_eq!(a.public_url("/storage"), None);
        let b = asset(storage::LOCAL, None, Some(PUBLIC_DISK), None);
        assert_eq!(b.public_url("/storage"), None);
    }
}
