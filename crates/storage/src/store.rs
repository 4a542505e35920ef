// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transactional chore store
//!
//! `Store::begin` takes the store's write lock and hands out a
//! [`Transaction`]. Writes are staged on the transaction and become visible
//! only on `commit`, which appends them to the WAL as a single batch before
//! applying them to the materialized state. Dropping an uncommitted
//! transaction discards its staged writes.
//!
//! Reads through a transaction see committed state, not the transaction's own
//! staged writes.
//!
//! A durable store holds an exclusive lock on a sibling `.lock` file for as
//! long as it is open. A second `Store::open` on the same WAL, from this
//! process or another, waits until the first store is dropped and then
//! replays everything it committed.

use crate::state::{InstanceFilter, MaterializedState};
use crate::wal::{Wal, WalError};
use chrono::NaiveDate;
use cw_core::{
    ChoreDefinition, ChoreDefinitionId, ChoreInstance, DefinitionPatch, InstanceId, InstancePatch,
    Operation,
};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("wal error: {0}")]
    Wal(#[from] WalError),
    #[error("failed to lock {path}: {source}")]
    Lock { path: PathBuf, source: io::Error },
}

/// Chore definition persistence
pub trait DefinitionStore {
    fn definition(&self, id: &ChoreDefinitionId) -> Option<ChoreDefinition>;
    fn create_definition(&mut self, definition: ChoreDefinition);
    fn update_definition(&mut self, id: &ChoreDefinitionId, patch: DefinitionPatch);
    fn delete_definition(&mut self, id: &ChoreDefinitionId);
}

/// Chore instance persistence
pub trait InstanceStore {
    fn instance(&self, id: &InstanceId) -> Option<ChoreInstance>;
    fn pending_instance(&self, definition: &ChoreDefinitionId) -> Option<ChoreInstance>;
    fn create_instance(&mut self, instance: ChoreInstance);
    fn update_instance(&mut self, id: &InstanceId, patch: InstancePatch);
    fn delete_instance(&mut self, id: &InstanceId);

    /// Delete the earliest pending instance of `definition` due strictly
    /// after `after`. At most one instance is deleted.
    fn delete_earliest_pending_after(
        &mut self,
        definition: &ChoreDefinitionId,
        after: NaiveDate,
    ) -> Option<InstanceId>;
}

struct StoreInner {
    state: MaterializedState,
    wal: Option<Wal>,
}

/// Chore store backed by an optional WAL
pub struct Store {
    inner: Mutex<StoreInner>,
    // Released when the store is dropped
    _lock: Option<File>,
}

impl Store {
    /// Open a store, replaying the WAL at `path`
    ///
    /// Blocks until no other store holds the WAL.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let lock = Self::lock(path)?;
        let batches = Wal::replay(path)?;
        let state = MaterializedState::from_batches(&batches);
        let wal = Wal::open(path)?;
        tracing::debug!(
            path = %path.display(),
            batches = batches.len(),
            definitions = state.definitions.len(),
            instances = state.instances.len(),
            "store opened"
        );
        Ok(Self::with_state(state, Some(wal), Some(lock)))
    }

    /// A store with no durable backing
    pub fn in_memory() -> Self {
        Self::with_state(MaterializedState::default(), None, None)
    }

    fn with_state(state: MaterializedState, wal: Option<Wal>, lock: Option<File>) -> Self {
        Self {
            inner: Mutex::new(StoreInner { state, wal }),
            _lock: lock,
        }
    }

    fn lock(wal: &Path) -> Result<File, StorageError> {
        let path = wal.with_extension("lock");
        let locked = || -> io::Result<File> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .truncate(false)
                .write(true)
                .open(&path)?;
            if file.try_lock_exclusive().is_err() {
                tracing::debug!(path = %path.display(), "waiting for store lock");
                file.lock_exclusive()?;
            }
            Ok(file)
        };
        locked().map_err(|source| StorageError::Lock {
            path: path.clone(),
            source,
        })
    }

    /// Start a transaction, waiting for any other transaction to finish
    pub async fn begin(&self) -> Transaction<'_> {
        Transaction {
            inner: self.inner.lock().await,
            staged: Vec::new(),
        }
    }

    /// Run a read against committed state
    pub async fn read<R>(&self, f: impl FnOnce(&MaterializedState) -> R) -> R {
        let inner = self.inner.lock().await;
        f(&inner.state)
    }

    /// Clone out instances matching a filter
    pub async fn instances(&self, filter: &InstanceFilter) -> Vec<ChoreInstance> {
        self.read(|state| state.list_instances(filter).into_iter().cloned().collect())
            .await
    }

    /// Clone out all definitions
    pub async fn definitions(&self) -> Vec<ChoreDefinition> {
        self.read(|state| state.list_definitions().into_iter().cloned().collect())
            .await
    }
}

/// An exclusive unit of work against the store
pub struct Transaction<'a> {
    inner: MutexGuard<'a, StoreInner>,
    staged: Vec<Operation>,
}

impl Transaction<'_> {
    /// Committed state as of the start of this transaction
    pub fn state(&self) -> &MaterializedState {
        &self.inner.state
    }

    /// Operations staged so far
    pub fn staged(&self) -> &[Operation] {
        &self.staged
    }

    pub fn stage(&mut self, op: Operation) {
        self.staged.push(op);
    }

    /// Persist and apply every staged operation, or none of them
    pub fn commit(mut self) -> Result<u64, StorageError> {
        if self.staged.is_empty() {
            return Ok(self.inner.wal.as_ref().map_or(0, Wal::sequence));
        }

        let staged = std::mem::take(&mut self.staged);
        let inner = &mut *self.inner;
        let seq = match inner.wal.as_mut() {
            Some(wal) => wal.append(&staged)?,
            None => 0,
        };
        for op in &staged {
            tracing::trace!(op = op.name(), "apply");
            inner.state.apply(op);
        }
        Ok(seq)
    }
}

impl DefinitionStore for Transaction<'_> {
    fn definition(&self, id: &ChoreDefinitionId) -> Option<ChoreDefinition> {
        self.inner.state.definitions.get(id).cloned()
    }

    fn create_definition(&mut self, definition: ChoreDefinition) {
        self.stage(Operation::DefinitionCreate { definition });
    }

    fn update_definition(&mut self, id: &ChoreDefinitionId, patch: DefinitionPatch) {
        self.stage(Operation::DefinitionUpdate {
            id: id.clone(),
            patch,
        });
    }

    fn delete_definition(&mut self, id: &ChoreDefinitionId) {
        self.stage(Operation::DefinitionDelete { id: id.clone() });
    }
}

impl InstanceStore for Transaction<'_> {
    fn instance(&self, id: &InstanceId) -> Option<ChoreInstance> {
        self.inner.state.instances.get(id).cloned()
    }

    fn pending_instance(&self, definition: &ChoreDefinitionId) -> Option<ChoreInstance> {
        self.inner.state.pending_instance(definition).cloned()
    }

    fn create_instance(&mut self, instance: ChoreInstance) {
        self.stage(Operation::InstanceCreate { instance });
    }

    fn update_instance(&mut self, id: &InstanceId, patch: InstancePatch) {
        self.stage(Operation::InstanceUpdate {
            id: id.clone(),
            patch,
        });
    }

    fn delete_instance(&mut self, id: &InstanceId) {
        self.stage(Operation::InstanceDelete { id: id.clone() });
    }

    fn delete_earliest_pending_after(
        &mut self,
        definition: &ChoreDefinitionId,
        after: NaiveDate,
    ) -> Option<InstanceId> {
        let id = self
            .inner
            .state
            .earliest_pending_after(definition, after)?
            .id
            .clone();
        self.delete_instance(&id);
        Some(id)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
