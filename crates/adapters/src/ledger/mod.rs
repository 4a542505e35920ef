// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reward ledger adapters
//!
//! The ledger credits a member when a chore instance is completed and
//! revokes the credit when the completion is undone.

mod file;

pub use file::{FileRewardLedger, LedgerEntry};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRewardLedger, LedgerCall};

use async_trait::async_trait;
use cw_core::{MemberId, RewardId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("reward not found: {0}")]
    UnknownReward(RewardId),
    #[error("invalid grant: {0}")]
    InvalidGrant(String),
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
    #[error("ledger io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger data error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a reward is being issued, and by whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardGrant {
    pub reason: String,
    pub awarded_by: String,
}

impl RewardGrant {
    pub fn new(reason: impl Into<String>, awarded_by: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            awarded_by: awarded_by.into(),
        }
    }
}

/// Adapter for the external reward ledger
#[async_trait]
pub trait RewardLedger: Clone + Send + Sync + 'static {
    /// Credit a member, returning the id of the new reward
    async fn award(&self, member: &MemberId, grant: &RewardGrant) -> Result<RewardId, LedgerError>;

    /// Revoke a previously issued reward
    async fn remove(&self, reward: &RewardId) -> Result<(), LedgerError>;
}
