use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: Uuid,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Logged-in sessions. Held in memory only; a restart logs everyone out.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self, user_id: u64) -> Session {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4(),
            user_id,
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions
            .write()
            .await
            .insert(session.token, session.clone());
        session
    }

    /// Returns the live session for `token`, dropping it if it has expired.
    pub async fn resolve(&self, token: Uuid) -> Option<Session> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let expired = match sessions.get(&token) {
            Some(session) if !session.is_expired(now) => return Some(session.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            sessions.remove(&token);
        }
        None
    }

    pub async fn revoke(&self, token: Uuid) -> bool {
        self.sessions.write().await.remove(&token).is_some()
    }

    pub async fn revoke_user(&self, user_id: u64) {
        self.sessions
            .write()
            .await
            .retain(|_, s| s.user_id != user_id);
    }

    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}
