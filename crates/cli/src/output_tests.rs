// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cw_core::{NewChoreDefinition, RecurrencePattern};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn rotating() -> ChoreDefinition {
    ChoreDefinition::from_new(
        "chr-0123456789abcdef".into(),
        NewChoreDefinition::new("Dishes")
            .recurring(RecurrencePattern::weekly().on_days([1, 3, 5]))
            .rotating(["ann", "bob"]),
    )
}

#[test]
fn short_id_truncates_long_ids_only() {
    assert_eq!(short_id("chr-0123456789abcdef"), "chr-01234567");
    assert_eq!(short_id("inst-7"), "inst-7");
}

#[test]
fn chore_row_shows_schedule_and_members() {
    let row = ChoreRow(rotating()).to_string();

    assert!(row.starts_with("chr-01234567 Dishes"), "{row}");
    assert!(row.contains("weekly on Mon,Wed,Fri"), "{row}");
    assert!(row.ends_with("ann,bob"), "{row}");
}

#[test]
fn one_off_chore_row_shows_default_member() {
    let definition = ChoreDefinition::from_new(
        "chr-1".into(),
        NewChoreDefinition::new("Fix sink").assigned_to("dad"),
    );

    let row = ChoreRow(definition).to_string();

    assert!(row.contains("once"), "{row}");
    assert!(row.ends_with("dad"), "{row}");
}

#[test]
fn chore_detail_lists_pending_instance() {
    let definition = rotating();
    let pending = ChoreInstance::pending(
        "inst-2".into(),
        definition.id.clone(),
        "ann".into(),
        d("2025-01-08"),
        None,
    );

    let text = ChoreDetail {
        definition,
        pending: Some(pending),
    }
    .to_string();

    assert!(text.contains("Rotation: ann, bob"), "{text}");
    assert!(text.contains("Current: ann"), "{text}");
    assert!(text.contains("Pending: inst-2 (ann, due 2025-01-08)"), "{text}");
}

#[test]
fn instance_row_serializes_status() {
    let instance = ChoreInstance::pending(
        "inst-2".into(),
        "chr-1".into(),
        "ann".into(),
        d("2025-01-08"),
        NaiveTime::from_hms_opt(19, 30, 0),
    );

    let row = InstanceRow::new(instance, "Dishes");
    assert!(row.to_string().contains("2025-01-08 19:30"));

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["status"], "pending");
    assert_eq!(json["chore"], "Dishes");
    assert_eq!(json["due_date"], "2025-01-08");
}

#[test]
fn deleted_chore_text_and_json() {
    let deleted = DeletedChore(rotating());

    assert_eq!(deleted.to_string(), "Deleted chore Dishes (chr-01234567)");
    let json = serde_json::to_value(&deleted).unwrap();
    assert_eq!(json["id"], "chr-0123456789abcdef");
    assert_eq!(json["name"], "Dishes");
}
