// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chore instances
//!
//! One concrete due occurrence of a definition. An instance is PENDING while
//! `completed_at` is unset and COMPLETED once it is stamped; the reward id is
//! only ever present alongside a completion stamp.

use crate::chore::{ChoreDefinitionId, MemberId};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a chore instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub String);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstanceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InstanceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Reward issued by the ledger for a completion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardId(pub String);

impl fmt::Display for RewardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RewardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Pending,
    Completed,
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceStatus::Pending => write!(f, "pending"),
            InstanceStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreInstance {
    pub id: InstanceId,
    pub chore_definition_id: ChoreDefinitionId,
    pub assigned_member_id: MemberId,
    pub due_date: NaiveDate,
    pub due_time: Option<NaiveTime>,
    pub completed_at: Option<DateTime<Utc>>,
    pub reward_id: Option<RewardId>,
}

impl ChoreInstance {
    /// Create a pending instance
    pub fn pending(
        id: InstanceId,
        chore_definition_id: ChoreDefinitionId,
        assigned_member_id: MemberId,
        due_date: NaiveDate,
        due_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            id,
            chore_definition_id,
            assigned_member_id,
            due_date,
            due_time,
            completed_at: None,
            reward_id: None,
        }
    }

    pub fn status(&self) -> InstanceStatus {
        if self.completed_at.is_some() {
            InstanceStatus::Completed
        } else {
            InstanceStatus::Pending
        }
    }

    pub fn is_pending(&self) -> bool {
        self.completed_at.is_none()
    }
}

/// Partial update of a stored instance: stamp a completion with its reward,
/// or clear both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstancePatch {
    Complete {
        completed_at: DateTime<Utc>,
        reward_id: Option<RewardId>,
    },
    Reopen,
}

impl InstancePatch {
    pub fn apply(&self, instance: &mut ChoreInstance) {
        match self {
            InstancePatch::Complete {
                completed_at,
                reward_id,
            } => {
                instance.completed_at = Some(*completed_at);
                instance.reward_id = reward_id.clone();
            }
            InstancePatch::Reopen => {
                instance.completed_at = None;
                instance.reward_id = None;
            }
        }
    }
}
