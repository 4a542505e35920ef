// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rotation assignment
//!
//! Pure functions over a definition's rotation list and pointer. Only the
//! lifecycle manager persists the pointer values computed here.

use crate::chore::{ChoreDefinition, MemberId};

/// Assignee of a definition's first instance
pub fn first_assignee(definition: &ChoreDefinition) -> Option<&MemberId> {
    definition
        .rotation()
        .first()
        .or(definition.default_member_id.as_ref())
}

/// Assignee of the instance that follows the current one
///
/// Falls back to the default member when the rotation is empty.
pub fn next_assignee(definition: &ChoreDefinition) -> Option<&MemberId> {
    let members = definition.rotation();
    match members.len() {
        0 => definition.default_member_id.as_ref(),
        1 => members.first(),
        len => members.get((definition.current_rotation_index + 1) % len),
    }
}

/// Pointer value after a completion, `None` when the rotation does not move
pub fn advance(definition: &ChoreDefinition) -> Option<usize> {
    let len = moving_len(definition)?;
    Some((definition.current_rotation_index + 1) % len)
}

/// Pointer value after undoing a completion; the inverse of [`advance`]
pub fn revert(definition: &ChoreDefinition) -> Option<usize> {
    let len = moving_len(definition)?;
    Some((definition.current_rotation_index % len + len - 1) % len)
}

fn moving_len(definition: &ChoreDefinition) -> Option<usize> {
    let len = definition.rotation().len();
    (len > 1).then_some(len)
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
