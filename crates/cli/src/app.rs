// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine wiring for a state directory

use crate::config::{Config, Paths};
use anyhow::{Context, Result};
use cw_adapters::{FileRewardLedger, TracedRewardLedger};
use cw_core::{SystemClock, UuidIdGen};
use cw_engine::{ChoreEngine, EngineDeps};
use cw_storage::Store;

pub type Ledger = TracedRewardLedger<FileRewardLedger>;
pub type Engine = ChoreEngine<Ledger, SystemClock, UuidIdGen>;

pub fn open_engine(paths: &Paths, config: &Config) -> Result<Engine> {
    let wal = paths.wal();
    let store = Store::open(&wal).with_context(|| format!("opening {}", wal.display()))?;
    let ledger = TracedRewardLedger::new(FileRewardLedger::new(paths.ledger()));

    Ok(ChoreEngine::new(
        EngineDeps { store, ledger },
        SystemClock,
        UuidIdGen,
        config.engine(),
    ))
}
