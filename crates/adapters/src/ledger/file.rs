// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file reward ledger
//!
//! Keeps every active reward in a single JSON document. Writes go to a
//! sibling temp file which is then renamed over the original.
//!
//! The in-process mutex only serializes callers sharing one ledger. Writers
//! in separate processes must hold the chore store's lock, which the engine
//! does for every award and removal.

use super::{LedgerError, RewardGrant, RewardLedger};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cw_core::{MemberId, RewardId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// One active reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: RewardId,
    pub member_id: MemberId,
    pub reason: String,
    pub awarded_by: String,
    pub awarded_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    next_id: u64,
    rewards: Vec<LedgerEntry>,
}

/// Reward ledger persisted to a JSON file
#[derive(Clone)]
pub struct FileRewardLedger {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileRewardLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All active rewards, oldest first
    pub async fn entries(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.rewards)
    }

    /// Number of active rewards per member
    pub async fn totals(&self) -> Result<BTreeMap<MemberId, usize>, LedgerError> {
        let mut totals = BTreeMap::new();
        for entry in self.entries().await? {
            *totals.entry(entry.member_id).or_insert(0) += 1;
        }
        Ok(totals)
    }

    async fn load(&self) -> Result<LedgerFile, LedgerError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LedgerFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, file: &LedgerFile) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(file)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RewardLedger for FileRewardLedger {
    async fn award(&self, member: &MemberId, grant: &RewardGrant) -> Result<RewardId, LedgerError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;

        file.next_id += 1;
        let id = RewardId(format!("rwd-{}", file.next_id));
        file.rewards.push(LedgerEntry {
            id: id.clone(),
            member_id: member.clone(),
            reason: grant.reason.clone(),
            awarded_by: grant.awarded_by.clone(),
            awarded_at: Utc::now(),
        });

        self.save(&file).await?;
        Ok(id)
    }

    async fn remove(&self, reward: &RewardId) -> Result<(), LedgerError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;

        let before = file.rewards.len();
        file.rewards.retain(|entry| &entry.id != reward);
        if file.rewards.len() == before {
            return Err(LedgerError::UnknownReward(reward.clone()));
        }

        self.save(&file).await
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
