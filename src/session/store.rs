//! Session token storage.

use crate::config::SessionConfig;
use crate::session::SessionContext;
use crate::utils::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            issued_at: Utc::now(),
        }
    }
}

/// Holds the current session token, optionally mirrored to a JSON file.
///
/// Clones share the same token.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    record: Arc<RwLock<Option<SessionRecord>>>,
    file: Option<PathBuf>,
}

impl TokenStore {
    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn persistent(file: impl Into<PathBuf>) -> Self {
        Self {
            record: Arc::default(),
            file: Some(file.into()),
        }
    }

    /// An in-memory store already holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::in_memory();
        store.set(Some(SessionRecord::new(token)));
        store
    }

    pub fn from_config(config: &SessionConfig) -> anyhow::Result<Self> {
        if !config.persist {
            return Ok(Self::in_memory());
        }
        Ok(Self::persistent(config.resolve_file()?))
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn token(&self) -> Option<String> {
        self.record().map(|record| record.token)
    }

    pub fn record(&self) -> Option<SessionRecord> {
        self.record
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Restores a persisted session. Returns whether a token was found.
    ///
    /// A missing, empty or unreadable file leaves the store signed out.
    pub async fn load(&self) -> Result<bool> {
        let Some(path) = &self.file else {
            return Ok(self.has_token());
        };
        if !fs::try_exists(path).await? {
            self.set(None);
            return Ok(false);
        }

        let json = fs::read_to_string(path).await?;
        match serde_json::from_str::<SessionRecord>(&json) {
            Ok(record) if !record.token.is_empty() => {
                log::info!("Restored session issued at {}", record.issued_at);
                self.set(Some(record));
                Ok(true)
            }
            Ok(_) => {
                self.set(None);
                Ok(false)
            }
            Err(e) => {
                log::warn!("Ignoring unreadable session file {}: {e}", path.display());
                self.set(None);
                Ok(false)
            }
        }
    }

    /// Stores a new token and persists it when a file is configured.
    pub async fn login(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::session("token must not be empty"));
        }

        let record = SessionRecord::new(token.trim());
        if let Some(path) = &self.file {
            // Ensure parent directory exists
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            let json = serde_json::to_string_pretty(&record)?;
            fs::write(path, json).await?;
        }

        self.set(Some(record));
        log::info!("Session started");
        Ok(())
    }

    /// Deletes the persisted session, then drops the token.
    ///
    /// The token stays in memory when the file cannot be removed.
    pub async fn logout(&self) -> Result<()> {
        if let Some(path) = &self.file {
            if fs::try_exists(path).await? {
                fs::remove_file(path).await?;
            }
        }
        self.set(None);
        log::info!("Session ended");
        Ok(())
    }

    fn set(&self, record: Option<SessionRecord>) {
        *self.record.write().unwrap_or_else(PoisonError::into_inner) = record;
    }
}

impl SessionContext for TokenStore {
    fn has_token(&self) -> bool {
        self.record
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|record| !record.token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorKind;
    use rstest::rstest;

    #[test]
    fn new_store_has_no_token() {
        let store = TokenStore::in_memory();
        assert!(!store.has_token());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn clones_share_the_token() {
        let store = TokenStore::with_token("abc");
        let clone = store.clone();
        assert!(clone.has_token());
        assert_eq!(clone.token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn login_and_logout_in_memory() {
        let store = TokenStore::in_memory();
        store.login("  secret ").await.unwrap();
        assert_eq!(store.token().as_deref(), Some("secret"));

        store.logout().await.unwrap();
        assert!(!store.has_token());
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let store = TokenStore::in_memory();
        let err = store.login("   ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Session);
        assert!(!store.has_token());
    }

    #[tokio::test]
    async fn persisted_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("session.json");

        let store = TokenStore::persistent(&file);
        store.login("persisted").await.unwrap();
        assert!(file.exists());

        let restarted = TokenStore::persistent(&file);
        assert!(restarted.load().await.unwrap());
        assert_eq!(restarted.token().as_deref(), Some("persisted"));

        restarted.logout().await.unwrap();
        assert!(!file.exists());
        assert!(!TokenStore::persistent(&file).load().await.unwrap());
    }

    #[tokio::test]
    async fn failed_logout_keeps_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.json");
        let store = TokenStore::persistent(&file);
        store.login("sticky").await.unwrap();

        // A directory in place of the file cannot be unlinked, even as root
        std::fs::remove_file(&file).unwrap();
        std::fs::create_dir(&file).unwrap();
        std::fs::write(file.join("keep"), "x").unwrap();

        let err = store.logout().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(store.has_token());
        assert_eq!(store.token().as_deref(), Some("sticky"));
        assert!(file.exists());
    }

    #[rstest]
    #[case("{not json")]
    #[case(r#"{"token":"","issued_at":"2026-01-01T00:00:00Z"}"#)]
    #[tokio::test]
    async fn unusable_file_signs_out(#[case] contents: &str) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.json");
        let store = TokenStore::persistent(&file);
        store.login("stale").await.unwrap();
        std::fs::write(&file, contents).unwrap();

        assert!(!store.load().await.unwrap());
        assert!(!store.has_token());
    }

    #[tokio::test]
    async fn missing_file_signs_out() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.json");
        let store = TokenStore::persistent(&file);
        store.login("stale").await.unwrap();
        std::fs::remove_file(&file).unwrap();

        assert!(!store.load().await.unwrap());
        assert_eq!(store.token(), None);
    }

    #[tokio::test]
    async fn corrupt_session_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.json");
        std::fs::write(&file, "{not json").unwrap();

        let store = TokenStore::persistent(&file);
        assert!(!store.load().await.unwrap());
        assert!(!store.has_token());
    }
}
