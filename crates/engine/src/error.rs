// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the chore engine

use cw_adapters::LedgerError;
use cw_core::{ChoreDefinitionId, DefinitionError, InstanceId};
use cw_storage::StorageError;
use std::fmt;
use thiserror::Error;

/// Why a complete/uncomplete request does not apply to an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTransition {
    AlreadyCompleted,
    NotCompleted,
    /// Reopening would leave the chore with two pending instances
    BlockedByPending,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTransition::AlreadyCompleted => write!(f, "already completed"),
            InvalidTransition::NotCompleted => write!(f, "not completed"),
            InvalidTransition::BlockedByPending => {
                write!(f, "blocked by another pending occurrence")
            }
        }
    }
}

/// Errors that can occur in the engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("instance {instance} is {reason}")]
    InvalidState {
        instance: InstanceId,
        reason: InvalidTransition,
    },
    #[error("chore '{chore}' has nobody to assign: add rotation members or a default member")]
    ConfigurationGap { chore: String },
    #[error("chore {definition} already has a pending instance {instance}")]
    PendingExists {
        definition: ChoreDefinitionId,
        instance: InstanceId,
    },
    #[error("invalid chore definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),
    #[error("reward ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl EngineError {
    pub(crate) fn definition_not_found(id: impl fmt::Display) -> Self {
        EngineError::NotFound {
            kind: "chore",
            id: id.to_string(),
        }
    }

    pub(crate) fn instance_not_found(id: impl fmt::Display) -> Self {
        EngineError::NotFound {
            kind: "instance",
            id: id.to_string(),
        }
    }

    /// True for caller misuse of complete/uncomplete
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, EngineError::InvalidState { .. })
    }
}
