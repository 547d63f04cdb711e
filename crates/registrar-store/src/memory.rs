//! In-memory row store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use registrar_schema::RowElement;
use registrar_types::RowId;

use crate::RowStore;
use crate::error::{Result, StoreError};

/// First id handed out by a fresh [`MemoryRowStore`].
pub const DEFAULT_FIRST_ROW_ID: u64 = 1;

#[derive(Debug)]
struct MemoryInner {
    rows: BTreeMap<RowId, RowElement>,
    next_id: Option<u64>,
}

/// A [`RowStore`] that keeps rows in a map.
///
/// Ids are sequential starting at the configured first id and are never
/// reused, even after a delete. Updates keep the row under its id. Clones
/// share the same rows.
#[derive(Debug, Clone)]
pub struct MemoryRowStore {
    inner: Arc<RwLock<MemoryInner>>,
}

impl Default for MemoryRowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRowStore {
    /// Creates an empty store issuing ids from [`DEFAULT_FIRST_ROW_ID`].
    pub fn new() -> Self {
        Self::with_first_id(DEFAULT_FIRST_ROW_ID)
    }

    /// Creates an empty store issuing ids from `first_id`.
    pub fn with_first_id(first_id: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryInner {
                rows: BTreeMap::new(),
                next_id: Some(first_id),
            })),
        }
    }

    /// Returns the row stored under `id`, if any.
    pub fn get(&self, id: RowId) -> Result<Option<RowElement>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::internal("lock poisoned"))?;
        Ok(inner.rows.get(&id).cloned())
    }

    /// Returns all rows in id order.
    pub fn rows(&self) -> Result<Vec<(RowId, RowElement)>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::internal("lock poisoned"))?;
        Ok(inner
            .rows
            .iter()
            .map(|(id, row)| (*id, row.clone()))
            .collect())
    }

    pub fn len(&self) -> Result<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::internal("lock poisoned"))?;
        Ok(inner.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl RowStore for MemoryRowStore {
    fn insert_row(&self, row: &RowElement) -> Result<RowId> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::internal("lock poisoned"))?;

        let raw = inner.next_id.ok_or(StoreError::IdsExhausted)?;
        inner.next_id = raw.checked_add(1);

        let id = RowId::new(raw);
        inner.rows.insert(id, row.clone());

        tracing::debug!(%id, first_name = %row.first_name, last_name = %row.last_name, "row inserted");
        Ok(id)
    }

    fn update_row(&self, id: RowId, row: &RowElement) -> Result<RowId> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::internal("lock poisoned"))?;

        let Some(slot) = inner.rows.get_mut(&id) else {
            tracing::warn!(%id, "update of unknown row");
            return Err(StoreError::RowNotFound(id));
        };
        *slot = row.clone();

        tracing::debug!(%id, age = ?row.age, "row updated");
        Ok(id)
    }

    fn delete_row(&self, id: RowId) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::internal("lock poisoned"))?;

        if inner.rows.remove(&id).is_none() {
            tracing::warn!(%id, "delete of unknown row");
            return Err(StoreError::RowNotFound(id));
        }

        tracing::debug!(%id, "row deleted");
        Ok(())
    }
}
