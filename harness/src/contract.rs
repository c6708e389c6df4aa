//! Collaborator contracts: session storage and the video catalog.
//!
//! The runner owns orchestration only. Where a session's configuration,
//! cursor and request counter live is a store concern; which video ids have
//! recordings is a catalog concern.

use serde::{Deserialize, Serialize};

use dining_suggest::cursor::RngCursor;
use dining_suggest::policy::SessionConfig;

pub use dining_kernel::video::catalog::VideoCatalog;

/// Durable per-session data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub config: SessionConfig,
    pub cursor: RngCursor,
    /// Requests served so far. Also the index of the next request in the
    /// corruption schedule.
    pub request_counter: u64,
}

impl SessionRecord {
    #[must_use]
    pub fn new(config: SessionConfig, cursor: RngCursor) -> Self {
        Self {
            config,
            cursor,
            request_counter: 0,
        }
    }
}

/// Typed failure for session store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No session with this id was provisioned.
    #[error("unknown session {id:?}")]
    UnknownSession { id: String },
    /// A previous holder of the session panicked mid-update.
    #[error("session {id:?} is poisoned")]
    Poisoned { id: String },
}

/// Storage for session records with single-writer-per-session semantics.
///
/// A store provides:
/// - Idempotent provisioning, serialized across the whole store
/// - Exclusive access to one session's record for the span of a closure
///
/// Work on different sessions must not block each other beyond provisioning.
pub trait SessionStore: Send + Sync {
    /// Create the session if it does not exist and return its record.
    /// An existing session is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the store's lock is poisoned.
    fn provision(&self, id: &str, record: SessionRecord) -> Result<SessionRecord, StoreError>;

    /// Run `f` with exclusive access to the session's record. Changes made
    /// by `f` are persisted when it returns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownSession`] or [`StoreError::Poisoned`].
    fn with_session<R, F>(&self, id: &str, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut SessionRecord) -> R;

    /// A copy of the session's record.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::with_session`].
    fn snapshot(&self, id: &str) -> Result<SessionRecord, StoreError> {
        self.with_session(id, |record| record.clone())
    }
}
