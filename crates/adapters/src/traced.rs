// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::ledger::{LedgerError, RewardGrant, RewardLedger};
use async_trait::async_trait;
use cw_core::{MemberId, RewardId};
use tracing::Instrument;

/// Wrapper that adds tracing to any RewardLedger
#[derive(Clone)]
pub struct TracedRewardLedger<L> {
    inner: L,
}

impl<L> TracedRewardLedger<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: RewardLedger> RewardLedger for TracedRewardLedger<L> {
    async fn award(&self, member: &MemberId, grant: &RewardGrant) -> Result<RewardId, LedgerError> {
        let span = tracing::info_span!("ledger.award", member = %member);

        async move {
            tracing::info!(reason = %grant.reason, awarded_by = %grant.awarded_by, "awarding");

            // Precondition: every reward names who issued it
            if grant.awarded_by.trim().is_empty() {
                tracing::error!("awarded_by is empty");
                return Err(LedgerError::InvalidGrant(
                    "awarded_by must not be empty".to_string(),
                ));
            }

            let start = std::time::Instant::now();
            let result = self.inner.award(member, grant).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(reward) => tracing::info!(
                    reward = %reward,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "reward issued"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "award failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn remove(&self, reward: &RewardId) -> Result<(), LedgerError> {
        let span = tracing::info_span!("ledger.remove", reward = %reward);

        async move {
            let start = std::time::Instant::now();
            let result = self.inner.remove(reward).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "reward removed"),
                // Undo of an already-revoked reward lands here
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "remove failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
