// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Chore storage: WAL, materialized state, and transactions

mod state;
mod store;
mod wal;

pub use state::{InstanceFilter, MaterializedState};
pub use store::{DefinitionStore, InstanceStore, StorageError, Store, Transaction};
pub use wal::{Wal, WalError};
