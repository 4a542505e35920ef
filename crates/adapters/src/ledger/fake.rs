// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake reward ledger for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{LedgerError, RewardGrant, RewardLedger};
use async_trait::async_trait;
use cw_core::{MemberId, RewardId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded ledger call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCall {
    Award { member: MemberId, grant: RewardGrant },
    Remove { reward: RewardId },
}

#[derive(Default)]
struct FakeLedgerState {
    calls: Vec<LedgerCall>,
    active: HashMap<RewardId, MemberId>,
    next_id: u64,
    fail_awards: bool,
    fail_removes: bool,
}

/// Fake reward ledger for testing
///
/// Issues `rwd-N` ids, records every call (including failed ones), and can
/// be told to fail awards or removals.
#[derive(Clone, Default)]
pub struct FakeRewardLedger {
    state: Arc<Mutex<FakeLedgerState>>,
}

impl FakeRewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<LedgerCall> {
        self.lock().calls.clone()
    }

    /// Number of recorded award calls
    pub fn award_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, LedgerCall::Award { .. }))
            .count()
    }

    /// Number of recorded remove calls
    pub fn remove_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, LedgerCall::Remove { .. }))
            .count()
    }

    /// Rewards issued and not yet removed
    pub fn active(&self) -> HashMap<RewardId, MemberId> {
        self.lock().active.clone()
    }

    /// Make subsequent awards fail
    pub fn set_fail_awards(&self, fail: bool) {
        self.lock().fail_awards = fail;
    }

    /// Make subsequent removals fail
    pub fn set_fail_removes(&self, fail: bool) {
        self.lock().fail_removes = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeLedgerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RewardLedger for FakeRewardLedger {
    async fn award(&self, member: &MemberId, grant: &RewardGrant) -> Result<RewardId, LedgerError> {
        let mut state = self.lock();
        state.calls.push(LedgerCall::Award {
            member: member.clone(),
            grant: grant.clone(),
        });
        if state.fail_awards {
            return Err(LedgerError::Unavailable("award rejected".to_string()));
        }

        state.next_id += 1;
        let id = RewardId(format!("rwd-{}", state.next_id));
        state.active.insert(id.clone(), member.clone());
        Ok(id)
    }

    async fn remove(&self, reward: &RewardId) -> Result<(), LedgerError> {
        let mut state = self.lock();
        state.calls.push(LedgerCall::Remove {
            reward: reward.clone(),
        });
        if state.fail_removes {
            return Err(LedgerError::Unavailable("remove rejected".to_string()));
        }

        match state.active.remove(reward) {
            Some(_) => Ok(()),
            None => Err(LedgerError::UnknownReward(reward.clone())),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
