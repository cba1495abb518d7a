//! Music section model (one row per invitation).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use undangan_core::types::{DbId, Timestamp};

/// A row from the `invitation_music` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Music {
    pub invitation_id: DbId,
    pub audio_asset_id: Option<DbId>,
    pub autoplay: bool,
    pub loop_audio: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Playback flags of the music section, as submitted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMusic {
    pub autoplay: Option<bool>,
    pub loop_audio: Option<bool>,
}
