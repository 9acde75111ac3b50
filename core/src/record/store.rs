//! Token → component record bookkeeping.

use super::arena::{RecordArena, RecordKey};
use super::executor::ExecutorHandle;
use crate::info::ComponentInfo;
use crate::token::Token;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Local bookkeeping for one running component.
#[derive(Debug)]
pub struct ComponentRecord {
    info: Arc<ComponentInfo>,
    token: Token,
    launched_at: DateTime<Utc>,
    executor: Mutex<Option<ExecutorHandle>>,
}

impl ComponentRecord {
    pub fn new(info: Arc<ComponentInfo>, token: Token) -> Self {
        Self {
            info,
            token,
            launched_at: Utc::now(),
            executor: Mutex::new(None),
        }
    }

    pub fn info(&self) -> &Arc<ComponentInfo> {
        &self.info
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn launched_at(&self) -> DateTime<Utc> {
        self.launched_at
    }

    pub fn executor(&self) -> Option<ExecutorHandle> {
        self.executor.lock().clone()
    }

    pub fn set_executor(&self, executor: ExecutorHandle) {
        *self.executor.lock() = Some(executor);
    }

    pub fn take_executor(&self) -> Option<ExecutorHandle> {
        self.executor.lock().take()
    }
}

#[derive(Default)]
struct StoreInner {
    arena: RecordArena<Arc<ComponentRecord>>,
    keys: HashMap<Token, RecordKey>,
    current: Option<Token>,
}

/// Process-wide map from component token to its record, plus the
/// "current token" slot used when binding executors.
///
/// All operations take the internal lock for their whole duration, so a
/// token maps to at most one live record at any time.
#[derive(Default)]
pub struct RecordStore {
    inner: RwLock<StoreInner>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_token(&self, token: Token) {
        if token.is_null() {
            warn!("RecordStore::set_current_token ignored null token");
            return;
        }
        self.inner.write().current = Some(token);
    }

    pub fn current_token(&self) -> Option<Token> {
        self.inner.read().current
    }

    /// Insert or overwrite the record for `token`.
    pub fn add_record(&self, token: Token, record: impl Into<Option<Arc<ComponentRecord>>>) {
        let Some(record) = record.into() else {
            warn!(%token, "RecordStore::add_record ignored null record");
            return;
        };
        if token.is_null() {
            warn!("RecordStore::add_record ignored null token");
            return;
        }

        let mut inner = self.inner.write();
        if let Some(old) = inner.keys.remove(&token) {
            inner.arena.remove(old);
            debug!(%token, "RecordStore::add_record overwriting existing record");
        }
        let key = inner.arena.insert(record);
        inner.keys.insert(token, key);
    }

    /// Remove the record for `token`, returning it if one was live.
    pub fn remove_record(&self, token: Token) -> Option<Arc<ComponentRecord>> {
        if token.is_null() {
            return None;
        }
        let mut inner = self.inner.write();
        let key = inner.keys.remove(&token)?;
        inner.arena.remove(key)
    }

    pub fn get_record(&self, token: Token) -> Option<Arc<ComponentRecord>> {
        if token.is_null() {
            return None;
        }
        let inner = self.inner.read();
        let key = inner.keys.get(&token)?;
        inner.arena.get(*key).cloned()
    }

    /// Arena key currently assigned to `token`.
    pub fn key_for(&self, token: Token) -> Option<RecordKey> {
        if token.is_null() {
            return None;
        }
        self.inner.read().keys.get(&token).copied()
    }

    /// Resolve a previously obtained key; stale keys resolve to `None`.
    pub fn record_for_key(&self, key: RecordKey) -> Option<Arc<ComponentRecord>> {
        self.inner.read().arena.get(key).cloned()
    }

    pub fn count(&self) -> usize {
        self.inner.read().arena.len()
    }

    pub fn all_tokens(&self) -> Vec<Token> {
        self.inner.read().keys.keys().copied().collect()
    }

    /// Attach `executor` to the record of the current token.
    ///
    /// The current token and its record are resolved under one read lock, so
    /// a concurrent `set_current_token` cannot redirect the binding halfway.
    pub fn bind_executor(&self, executor: ExecutorHandle) -> bool {
        let inner = self.inner.read();
        let Some(token) = inner.current else {
            warn!("RecordStore::bind_executor no current token");
            return false;
        };
        let Some(record) = inner.keys.get(&token).and_then(|key| inner.arena.get(*key)) else {
            warn!(%token, "RecordStore::bind_executor no record for current token");
            return false;
        };
        record.set_executor(executor);
        true
    }
}
