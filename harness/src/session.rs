//! In-memory session store.
//!
//! Lock order: the store map lock is held only to find or insert a
//! session's handle, never while a session's own lock is held.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::contract::{SessionRecord, SessionStore, StoreError};

type SessionHandle = Arc<Mutex<SessionRecord>>;

/// A [`SessionStore`] backed by a map of per-session mutexes.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<BTreeMap<String, SessionHandle>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of provisioned sessions.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the store's lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.map_lock()?.len())
    }

    /// # Errors
    ///
    /// Same as [`InMemorySessionStore::len`].
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.map_lock()?.is_empty())
    }

    fn map_lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, SessionHandle>>, StoreError> {
        self.sessions.lock().map_err(|_| StoreError::Poisoned {
            id: String::from("<store>"),
        })
    }

    fn handle(&self, id: &str) -> Result<SessionHandle, StoreError> {
        self.map_lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownSession { id: id.to_string() })
    }
}

impl SessionStore for InMemorySessionStore {
    fn provision(&self, id: &str, record: SessionRecord) -> Result<SessionRecord, StoreError> {
        let handle = {
            let mut map = self.map_lock()?;
            Arc::clone(
                map.entry(id.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(record))),
            )
        };
        let guard = handle
            .lock()
            .map_err(|_| StoreError::Poisoned { id: id.to_string() })?;
        Ok(guard.clone())
    }

    fn with_session<R, F>(&self, id: &str, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut SessionRecord) -> R,
    {
        let handle = self.handle(id)?;
        let mut guard = handle
            .lock()
            .map_err(|_| StoreError::Poisoned { id: id.to_string() })?;
        Ok(f(&mut *guard))
    }
}
