// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chore definitions
//!
//! A definition is the long-lived template: what the chore is, whether it
//! recurs, and who does it. Instances are generated from it.

use crate::recurrence::{PatternError, RecurrencePattern};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Unique identifier for a chore definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoreDefinitionId(pub String);

impl fmt::Display for ChoreDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChoreDefinitionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChoreDefinitionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Household member id. Existence is the member directory's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("chore name must not be empty")]
    EmptyName,
    #[error("invalid recurrence pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("member {0} appears more than once in the rotation")]
    DuplicateRotationMember(MemberId),
}

/// A chore template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreDefinition {
    pub id: ChoreDefinitionId,
    pub name: String,
    pub is_active: bool,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<RecurrencePattern>,
    pub is_rotating: bool,
    /// Ordered; order and uniqueness are both significant
    pub rotation_member_ids: Vec<MemberId>,
    /// Always `< rotation_member_ids.len()` when the list is non-empty
    pub current_rotation_index: usize,
    pub default_member_id: Option<MemberId>,
    pub due_time: Option<NaiveTime>,
}

impl ChoreDefinition {
    /// Build a stored definition from a request. The rotation starts at index 0.
    pub fn from_new(id: ChoreDefinitionId, new: NewChoreDefinition) -> Self {
        Self {
            id,
            name: new.name,
            is_active: true,
            is_recurring: new.is_recurring,
            recurrence_pattern: new.recurrence_pattern,
            is_rotating: new.is_rotating,
            rotation_member_ids: new.rotation_member_ids,
            current_rotation_index: 0,
            default_member_id: new.default_member_id,
            due_time: new.due_time,
        }
    }

    /// Rotation members in effect, empty when the chore does not rotate
    pub fn rotation(&self) -> &[MemberId] {
        if self.is_rotating {
            &self.rotation_member_ids
        } else {
            &[]
        }
    }

    /// Whether completing an instance moves the rotation pointer
    pub fn rotates_on_completion(&self) -> bool {
        self.rotation().len() > 1
    }
}

/// Request to create a chore definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChoreDefinition {
    pub name: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<RecurrencePattern>,
    #[serde(default)]
    pub is_rotating: bool,
    #[serde(default)]
    pub rotation_member_ids: Vec<MemberId>,
    #[serde(default)]
    pub default_member_id: Option<MemberId>,
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
}

impl NewChoreDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn recurring(mut self, pattern: RecurrencePattern) -> Self {
        self.is_recurring = true;
        self.recurrence_pattern = Some(pattern);
        self
    }

    pub fn rotating<I, M>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MemberId>,
    {
        self.is_rotating = true;
        self.rotation_member_ids = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn assigned_to(mut self, member: impl Into<MemberId>) -> Self {
        self.default_member_id = Some(member.into());
        self
    }

    pub fn at(mut self, due_time: NaiveTime) -> Self {
        self.due_time = Some(due_time);
        self
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if let Some(pattern) = &self.recurrence_pattern {
            pattern.validate()?;
        }
        let mut seen = HashSet::new();
        for member in &self.rotation_member_ids {
            if !seen.insert(member) {
                return Err(DefinitionError::DuplicateRotationMember(member.clone()));
            }
        }
        Ok(())
    }
}

/// Partial update of a stored definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_rotation_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl DefinitionPatch {
    pub fn rotation_index(index: usize) -> Self {
        Self {
            current_rotation_index: Some(index),
            ..Self::default()
        }
    }

    pub fn apply(&self, definition: &mut ChoreDefinition) {
        if let Some(index) = self.current_rotation_index {
            definition.current_rotation_index = index;
        }
        if let Some(active) = self.is_active {
            definition.is_active = active;
        }
    }
}

#[cfg(test)]
#[path = "chore_tests.rs"]
mod tests;
