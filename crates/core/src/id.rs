// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ID generation abstractions
//!
//! Ids carry a short kind prefix (`chr`, `inst`) so they can be told apart
//! on the command line and matched by unique prefix.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Prefix for chore definition ids
pub const CHORE_PREFIX: &str = "chr";
/// Prefix for chore instance ids
pub const INSTANCE_PREFIX: &str = "inst";

/// Generates unique identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self, prefix: &str) -> String;
}

/// UUID-based ID generator for production use
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
    }
}

/// Sequential ID generator for testing
///
/// One counter is shared by every prefix and every clone.
#[derive(Clone, Default)]
pub struct SequentialIdGen {
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", prefix, n)
    }
}
