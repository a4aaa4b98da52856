//! Session registry
//!
//! One entry is written per `initialize`. Entries are never read back,
//! updated or removed; the registry only grows for the lifetime of the
//! process and its size is reported by the health endpoint.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Record of one `initialize` handshake
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub initialized_at: DateTime<Utc>,
}

/// Insert-only table of sessions, safe to share between request tasks
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session and return its id
    pub async fn create(&self) -> String {
        let session = Session {
            id: Uuid::new_v4().to_string(),
            initialized_at: Utc::now(),
        };
        let id = session.id.clone();

        self.sessions.write().await.insert(id.clone(), session);
        tracing::debug!("Session created: {}", id);
        id
    }

    /// Number of sessions created so far
    pub async fn size(&self) -> usize {
        self.sessions.read().await.len()
    }
}
