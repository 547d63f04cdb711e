//! # registrar-store: Row persistence for `Registrar`
//!
//! The core never talks to a database directly. It hands [`RowElement`]s to
//! a [`RowStore`] and threads the returned [`RowId`]s back into later calls.
//!
//! [`MemoryRowStore`] is an in-process implementation used by tests and the
//! CLI walkthrough.
//!
//! ```
//! use registrar_schema::RowElement;
//! use registrar_store::{MemoryRowStore, RowStore};
//!
//! let store = MemoryRowStore::new();
//! let id = store.insert_row(&RowElement::new("Guillaume", "Salva"))?;
//! store.update_row(id, &RowElement::new("Guillaume", "Salva").with_age(23))?;
//! store.delete_row(id)?;
//! assert!(store.is_empty()?);
//! # Ok::<(), registrar_store::StoreError>(())
//! ```
//!
//! [`RowElement`]: registrar_schema::RowElement
//! [`RowId`]: registrar_types::RowId

mod error;
mod memory;

#[cfg(test)]
mod tests;

use std::fmt::Debug;
use std::sync::Arc;

use registrar_schema::RowElement;
use registrar_types::RowId;

pub use error::{Result, StoreError};
pub use memory::{DEFAULT_FIRST_ROW_ID, MemoryRowStore};

/// Trait for persisting rows outside the process.
///
/// Calls block until the backing store has answered. Implementations decide
/// how ids are allocated; callers treat them as opaque.
///
/// # Errors
///
/// * [`StoreError::RowNotFound`] - `update_row`/`delete_row` with an id the
///   store does not hold
/// * [`StoreError::IdsExhausted`] - no further ids can be issued
/// * [`StoreError::Unavailable`] - the backing store could not be reached
pub trait RowStore: Send + Sync + Debug {
    /// Persists a new row and returns its id.
    fn insert_row(&self, row: &RowElement) -> Result<RowId>;

    /// Replaces the row stored under `id` and returns the id it now lives
    /// under.
    fn update_row(&self, id: RowId, row: &RowElement) -> Result<RowId>;

    /// Removes the row stored under `id`.
    fn delete_row(&self, id: RowId) -> Result<()>;
}

impl<S: RowStore + ?Sized> RowStore for Arc<S> {
    fn insert_row(&self, row: &RowElement) -> Result<RowId> {
        (**self).insert_row(row)
    }

    fn update_row(&self, id: RowId, row: &RowElement) -> Result<RowId> {
        (**self).update_row(id, row)
    }

    fn delete_row(&self, id: RowId) -> Result<()> {
        (**self).delete_row(id)
    }
}

impl<S: RowStore + ?Sized> RowStore for Box<S> {
    fn insert_row(&self, row: &RowElement) -> Result<RowId> {
        (**self).insert_row(row)
    }

    fn update_row(&self, id: RowId, row: &RowElement) -> Result<RowId> {
        (**self).update_row(id, row)
    }

    fn delete_row(&self, id: RowId) -> Result<()> {
        (**self).delete_row(id)
    }
}
