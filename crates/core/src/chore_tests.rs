// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_definition_starts_active_at_rotation_zero() {
    let new = NewChoreDefinition::new("Dishes").rotating(["ann", "bob"]);
    let def = ChoreDefinition::from_new(ChoreDefinitionId::from("chr-1"), new);

    assert!(def.is_active);
    assert_eq!(def.current_rotation_index, 0);
    assert_eq!(def.rotation(), &[MemberId::from("ann"), MemberId::from("bob")]);
}

#[test]
fn rotation_is_empty_when_not_rotating() {
    let mut new = NewChoreDefinition::new("Dishes").assigned_to("ann");
    new.rotation_member_ids = vec!["bob".into(), "cat".into()];
    let def = ChoreDefinition::from_new("chr-1".into(), new);

    assert!(def.rotation().is_empty());
    assert!(!def.rotates_on_completion());
}

#[test]
fn single_member_rotation_does_not_move() {
    let def = ChoreDefinition::from_new(
        "chr-1".into(),
        NewChoreDefinition::new("Trash").rotating(["ann"]),
    );
    assert!(!def.rotates_on_completion());
}

#[test]
fn validate_rejects_empty_name() {
    assert_eq!(
        NewChoreDefinition::new("  ").validate(),
        Err(DefinitionError::EmptyName)
    );
}

#[test]
fn validate_rejects_duplicate_rotation_member() {
    let new = NewChoreDefinition::new("Dishes").rotating(["ann", "bob", "ann"]);
    assert_eq!(
        new.validate(),
        Err(DefinitionError::DuplicateRotationMember("ann".into()))
    );
}

#[test]
fn validate_checks_the_pattern() {
    let new = NewChoreDefinition::new("Dishes")
        .recurring(crate::RecurrencePattern::weekly().on_days([9]));
    assert!(matches!(new.validate(), Err(DefinitionError::Pattern(_))));
}

#[test]
fn patch_updates_rotation_index_only() {
    let mut def = ChoreDefinition::from_new(
        "chr-1".into(),
        NewChoreDefinition::new("Dishes").rotating(["ann", "bob"]),
    );
    DefinitionPatch::rotation_index(1).apply(&mut def);

    assert_eq!(def.current_rotation_index, 1);
    assert!(def.is_active);
}
