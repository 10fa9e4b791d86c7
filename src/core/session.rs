//! Session storage abstraction
//!
//! The logged-in user lives as a JSON blob under the key `user` in a
//! persistent key-value store. Containers read it on every fetch/submit
//! but never mutate it; only the login flow writes it.

use crate::core::bill::User;
use crate::core::error::SessionError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Key under which the logged-in user is persisted
pub const USER_KEY: &str = "user";

/// Persistent key-value store holding session state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a raw value
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a raw value
    async fn set(&self, key: &str, value: String) -> Result<(), SessionError>;

    /// Remove a value
    async fn remove(&self, key: &str) -> Result<(), SessionError>;

    /// Read the logged-in user
    async fn user(&self) -> Result<User, SessionError> {
        let raw = self
            .get(USER_KEY)
            .await?
            .ok_or(SessionError::NotLoggedIn)?;
        serde_json::from_str(&raw).map_err(|e| SessionError::Corrupt {
            message: e.to_string(),
        })
    }

    /// Persist the logged-in user
    async fn set_user(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user).map_err(|e| SessionError::Corrupt {
            message: e.to_string(),
        })?;
        self.set(USER_KEY, raw).await
    }
}

/// In-memory session store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let values = self.values.read().map_err(|e| SessionError::Storage {
            message: e.to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), SessionError> {
        let mut values = self.values.write().map_err(|e| SessionError::Storage {
            message: e.to_string(),
        })?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut values = self.values.write().map_err(|e| SessionError::Storage {
            message: e.to_string(),
        })?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bill::UserType;

    #[tokio::test]
    async fn test_set_and_get_user() {
        let session = InMemorySessionStore::new();
        let user = User {
            user_type: UserType::Employee,
            email: "employee@test.tld".to_string(),
        };

        session.set_user(&user).await.unwrap();

        let stored = session.user().await.unwrap();
        assert_eq!(stored.email, "employee@test.tld");
        assert_eq!(stored.user_type, UserType::Employee);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_logged_in() {
        let session = InMemorySessionStore::new();
        let err = session.user().await.unwrap_err();
        assert!(matches!(err, SessionError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_corrupt_user_is_reported() {
        let session = InMemorySessionStore::new();
        session
            .set(USER_KEY, "{not json".to_string())
            .await
            .unwrap();

        let err = session.user().await.unwrap_err();
        assert!(matches!(err, SessionError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_remove() {
        let session = InMemorySessionStore::new();
        session.set("k", "v".to_string()).await.unwrap();
        session.remove("k").await.unwrap();
        assert_eq!(session.get("k").await.unwrap(), None);
    }
}
