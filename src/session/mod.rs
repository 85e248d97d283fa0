//! Session context using moka
//!
//! A session is opened at login or signup and closed at logout. Sessions
//! that sit unused past the configured idle time are evicted.

pub mod extract;
pub mod validation;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::models::Profile;

pub use extract::CurrentSession;

/// Upper bound on concurrently open sessions
const MAX_SESSIONS: u64 = 10_000;

/// A signed-in user
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip)]
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

/// In-memory session store keyed by token
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<String, Arc<Session>>,
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(idle)
                .build(),
        }
    }

    /// Open a session for `email` and return it
    pub async fn open(&self, email: &str, full_name: Option<String>) -> Arc<Session> {
        let session = Arc::new(Session {
            token: Uuid::new_v4().to_string(),
            email: email.to_string(),
            profile: Profile::for_user(email, full_name.as_deref()),
            full_name,
            created_at: Utc::now(),
        });

        self.sessions
            .insert(session.token.clone(), session.clone())
            .await;
        info!("Session opened for {}", session.email);
        session
    }

    pub async fn get(&self, token: &str) -> Option<Arc<Session>> {
        self.sessions.get(token).await
    }

    /// Replace the session's profile; `None` if the session is gone.
    ///
    /// The replace is atomic per token, so a concurrent `close` can't be
    /// undone by a late profile write.
    pub async fn update_profile(&self, token: &str, profile: Profile) -> Option<Arc<Session>> {
        let result = self
            .sessions
            .entry(token.to_string())
            .and_compute_with(|existing| async move {
                match existing {
                    Some(entry) => Op::Put(Arc::new(Session {
                        profile,
                        ..Session::clone(entry.value())
                    })),
                    None => Op::Nop,
                }
            })
            .await;

        match result {
            CompResult::ReplacedWith(entry) => Some(entry.into_value()),
            _ => None,
        }
    }

    /// Close a session. Returns whether it was open.
    pub async fn close(&self, token: &str) -> bool {
        match self.sessions.remove(token).await {
            Some(session) => {
                info!("Session closed for {}", session.email);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_open_and_get() {
        let store = store();
        let session = store.open("ben10@gmail.com", None).await;

        assert!(Uuid::parse_str(&session.token).is_ok());
        let found = store.get(&session.token).await.unwrap();
        assert_eq!(found.email, "ben10@gmail.com");
        assert_eq!(found.profile.name, "ben10");
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let store = store();
        let a = store.open("a@example.com", None).await;
        let b = store.open("a@example.com", None).await;
        assert_ne!(a.token, b.token);
    }

    #[tokio::test]
    async fn test_close_ends_session() {
        let store = store();
        let session = store.open("ben10@gmail.com", None).await;

        assert!(store.close(&session.token).await);
        assert!(store.get(&session.token).await.is_none());
        assert!(!store.close(&session.token).await);
    }

    #[tokio::test]
    async fn test_update_profile() {
        let store = store();
        let session = store.open("john.doe@example.com", Some("John Doe".into())).await;

        let mut profile = session.profile.clone();
        profile.location = "Mumbai, Maharashtra".to_string();
        store.update_profile(&session.token, profile).await.unwrap();

        let found = store.get(&session.token).await.unwrap();
        assert_eq!(found.profile.location, "Mumbai, Maharashtra");
        assert_eq!(found.full_name.as_deref(), Some("John Doe"));
    }

    #[tokio::test]
    async fn test_update_profile_after_close_does_not_reopen() {
        let store = store();
        let session = store.open("ben10@gmail.com", None).await;
        let profile = session.profile.clone();

        assert!(store.close(&session.token).await);
        assert!(store.update_profile(&session.token, profile).await.is_none());
        assert!(store.get(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_update_profile_unknown_token() {
        let store = store();
        let profile = Profile::for_user("x@y.z", None);
        assert!(store.update_profile("missing", profile).await.is_none());
    }
}
