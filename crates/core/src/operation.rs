// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations for the write-ahead log
//!
//! Every persisted change to definitions or instances is one of these.
//! The engine stages a batch per lifecycle call and the storage layer
//! commits the batch as a unit.

use crate::chore::{ChoreDefinition, ChoreDefinitionId, DefinitionPatch};
use crate::instance::{ChoreInstance, InstanceId, InstancePatch};
use serde::{Deserialize, Serialize};

/// Operations that can be persisted to the WAL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Store a new chore definition
    DefinitionCreate { definition: ChoreDefinition },

    /// Update fields of a definition
    DefinitionUpdate {
        id: ChoreDefinitionId,
        patch: DefinitionPatch,
    },

    /// Delete a definition
    DefinitionDelete { id: ChoreDefinitionId },

    /// Store a new instance
    InstanceCreate { instance: ChoreInstance },

    /// Complete or reopen an instance
    InstanceUpdate { id: InstanceId, patch: InstancePatch },

    /// Delete an instance
    InstanceDelete { id: InstanceId },
}

impl Operation {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Operation::DefinitionCreate { .. } => "definition.create",
            Operation::DefinitionUpdate { .. } => "definition.update",
            Operation::DefinitionDelete { .. } => "definition.delete",
            Operation::InstanceCreate { .. } => "instance.create",
            Operation::InstanceUpdate { .. } => "instance.update",
            Operation::InstanceDelete { .. } => "instance.delete",
        }
    }
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
