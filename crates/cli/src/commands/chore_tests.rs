// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::Parser;
use cw_core::MemberId;

#[derive(Parser)]
struct Wrapper {
    #[command(flatten)]
    add: AddArgs,
}

fn parse(args: &[&str]) -> NewChoreDefinition {
    let argv = std::iter::once("cw").chain(args.iter().copied());
    Wrapper::try_parse_from(argv).unwrap().add.to_definition()
}

#[test]
fn plain_chore_is_one_off() {
    let new = parse(&["Fix sink", "--member", "dad"]);

    assert!(!new.is_recurring);
    assert_eq!(new.default_member_id, Some(MemberId::from("dad")));
}

#[test]
fn recurring_flag_defaults_to_daily() {
    let new = parse(&["Dishes", "--recurring", "--rotate", "ann,bob,cat"]);

    assert!(new.is_recurring);
    assert_eq!(new.recurrence_pattern, Some(RecurrencePattern::daily()));
    assert!(new.is_rotating);
    assert_eq!(new.rotation_member_ids.len(), 3);
}

#[test]
fn days_imply_weekly() {
    let new = parse(&["Vacuum", "--days", "1,3,5", "--member", "ann"]);

    assert_eq!(
        new.recurrence_pattern,
        Some(RecurrencePattern::weekly().on_days([1, 3, 5]))
    );
}

#[test]
fn explicit_frequency_and_interval() {
    let new = parse(&["Filters", "--frequency", "monthly", "--interval", "3"]);

    assert_eq!(
        new.recurrence_pattern,
        Some(RecurrencePattern::monthly().every(3))
    );
}

#[test]
fn due_time_is_parsed() {
    let new = parse(&["Dishes", "--due-time", "19:30"]);

    assert_eq!(new.due_time, NaiveTime::from_hms_opt(19, 30, 0));
}

#[test]
fn malformed_due_time_is_rejected() {
    let argv = ["cw", "Dishes", "--due-time", "7pm"];

    assert!(Wrapper::try_parse_from(argv).is_err());
}
