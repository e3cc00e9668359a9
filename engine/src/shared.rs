//! Thread-safe handle to a [`ResourceStore`].
//!
//! Reads (`list`, `find`, `filter`) share a read lock; mutations take the
//! write lock. A filtered read therefore runs over a snapshot that no
//! mutation can interleave with, and id assignment is serialized across
//! threads.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{error::Result, Error, FilterCriteria, Record, RecordId, ResourceStore};
use serde_json::Value;

/// Cloneable, shareable store handle. Clones point at the same store.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<ResourceStore>>,
}

impl SharedStore {
    /// Wrap a store for sharing.
    pub fn new(store: ResourceStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ResourceStore>> {
        self.inner.read().map_err(|_| Error::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ResourceStore>> {
        self.inner.write().map_err(|_| Error::LockPoisoned("write"))
    }

    pub fn list(&self) -> Result<Vec<Record>> {
        Ok(self.read()?.list())
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Record>> {
        Ok(self.read()?.filter(criteria))
    }

    /// Look up a record by id, returning a copy.
    pub fn find(&self, id: RecordId) -> Result<Option<Record>> {
        Ok(self.read()?.find(id).cloned())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    pub fn create(&self, payload: Value) -> Result<Record> {
        self.write()?.create(payload)
    }

    pub fn update(&self, id: RecordId, payload: Value) -> Result<Record> {
        self.write()?.update(id, payload)
    }

    pub fn patch(&self, id: RecordId, payload: Value) -> Result<Record> {
        self.write()?.patch(id, payload)
    }

    pub fn delete(&self, id: RecordId) -> Result<Record> {
        self.write()?.delete(id)
    }
}

impl From<ResourceStore> for SharedStore {
    fn from(store: ResourceStore) -> Self {
        Self::new(store)
    }
}
