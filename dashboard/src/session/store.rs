//! # Persistent Session Store
//!
//! Durable storage for the session token and the onboarding-completion flag,
//! the only two pieces of client state that survive a restart.
//!
//! The store is one JSON document at a configurable path, mirrored in memory
//! behind a synchronous lock. Every mutation rewrites the whole document in a
//! single operation, so concurrent callers never observe a partially updated
//! store. There is no encryption and no client-side expiry tracking: an
//! expired token surfaces as an unauthorized status on the next
//! authenticated request.

use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// The persisted document: two fixed keys, both optional.
///
/// The onboarding flag is stored as a boolean-as-string, matching the wire
/// heritage of the dashboard's durable state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(
        rename = "developerToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    token: Option<String>,
    #[serde(
        rename = "isOnboardingComplete",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    onboarding_complete: Option<String>,
}

/// Durable session store.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    document: RwLock<SessionDocument>,
}

impl SessionStore {
    /// Open the store at `path`, loading any existing document.
    ///
    /// A missing file starts the store empty; a malformed one is discarded
    /// with a warning rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Malformed session document, starting empty"
                    );
                    SessionDocument::default()
                }
            },
            Err(_) => SessionDocument::default(),
        };

        Self {
            path,
            document: RwLock::new(document),
        }
    }

    /// Current session token, if any.
    pub fn token(&self) -> Option<String> {
        self.document.read().token.clone()
    }

    /// Store the session token.
    pub fn set_token(&self, token: &str) {
        let mut document = self.document.write();
        document.token = Some(token.to_string());
        self.persist(&document);
    }

    /// Remove the session token, keeping the onboarding flag.
    pub fn clear_token(&self) {
        let mut document = self.document.write();
        document.token = None;
        self.persist(&document);
    }

    /// Whether onboarding has been completed.
    pub fn onboarding_complete(&self) -> bool {
        self.document.read().onboarding_complete.as_deref() == Some("true")
    }

    /// Persist the onboarding flag.
    pub fn set_onboarding_complete(&self, complete: bool) {
        let mut document = self.document.write();
        document.onboarding_complete = Some(complete.to_string());
        self.persist(&document);
    }

    /// Remove the onboarding flag.
    pub fn clear_onboarding_flag(&self) {
        let mut document = self.document.write();
        document.onboarding_complete = None;
        self.persist(&document);
    }

    /// Remove both keys (logout).
    pub fn clear(&self) {
        let mut document = self.document.write();
        *document = SessionDocument::default();
        self.persist(&document);
    }

    /// Write the document to disk.
    ///
    /// Persistence failures are logged, not propagated: the in-memory state
    /// is already updated and the session keeps working for this run.
    fn persist(&self, document: &SessionDocument) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }

        match serde_json::to_string_pretty(document) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::error!(
                        path = %self.path.display(),
                        error = %e,
                        "Failed to persist session document"
                    );
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize session document");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("session.json")
    }

    #[test]
    fn test_empty_store_has_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(scratch_path(&dir));

        assert_eq!(store.token(), None);
        assert!(!store.onboarding_complete());
    }

    #[test]
    fn test_token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir);

        let store = SessionStore::open(&path);
        store.set_token("hdr.payload.sig");
        store.set_onboarding_complete(true);
        drop(store);

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.token().as_deref(), Some("hdr.payload.sig"));
        assert!(reopened.onboarding_complete());
    }

    #[test]
    fn test_onboarding_flag_is_stored_as_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir);

        let store = SessionStore::open(&path);
        store.set_onboarding_complete(false);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["isOnboardingComplete"], "false");
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir);

        let store = SessionStore::open(&path);
        store.set_token("hdr.payload.sig");
        store.set_onboarding_complete(true);

        store.clear();

        assert_eq!(store.token(), None);
        assert!(!store.onboarding_complete());

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.token(), None);
    }

    #[test]
    fn test_clear_token_keeps_onboarding_flag() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(scratch_path(&dir));
        store.set_token("hdr.payload.sig");
        store.set_onboarding_complete(true);

        store.clear_token();

        assert_eq!(store.token(), None);
        assert!(store.onboarding_complete());
    }

    #[test]
    fn test_malformed_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir);
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::open(&path);
        assert_eq!(store.token(), None);
    }
}
