//! In-process TTL cache for render payloads.
//!
//! Only the serializable `dto`/`fields` pair is cached, never live model
//! structs. Invalidation is an explicit call wired into the invitation
//! lifecycle services; a save or delete must never leave a stale payload
//! behind.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use undangan_core::types::DbId;

use crate::render::{FieldMap, InvitationDto};

/// Version suffix baked into every cache key; bump when the payload schema
/// changes shape.
const PAYLOAD_SCHEMA_VERSION: &str = "v1";

/// The cached portion of a render payload.
#[derive(Debug, Clone)]
pub struct CachedPayload {
    pub dto: InvitationDto,
    pub fields: FieldMap,
}

/// Keyed, TTL-bounded store of render payloads.
#[derive(Clone)]
pub struct PayloadCache {
    inner: Cache<String, Arc<CachedPayload>>,
}

impl PayloadCache {
    /// Build a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder().time_to_live(ttl).build(),
        }
    }

    fn key(invitation_id: DbId) -> String {
        format!("invitation:{invitation_id}:payload:{PAYLOAD_SCHEMA_VERSION}")
    }

    /// Fetch the cached payload for an invitation, if present and fresh.
    pub async fn get(&self, invitation_id: DbId) -> Option<Arc<CachedPayload>> {
        self.inner.get(&Self::key(invitation_id)).await
    }

    /// Store the payload for an invitation.
    pub async fn insert(&self, invitation_id: DbId, payload: CachedPayload) -> Arc<CachedPayload> {
        let payload = Arc::new(payload);
        self.inner
            .insert(Self::key(invitation_id), Arc::clone(&payload))
            .await;
        payload
    }

    /// Drop the cached payload for an invitation. Called on every save and
    /// delete.
    pub async fn invalidate(&self, invitation_id: DbId) {
        self.inner.invalidate(&Self::key(invitation_id)).await;
    }
}
