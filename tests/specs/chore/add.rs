//! Chore definition specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn chore_list_empty() {
    let home = Household::empty();

    home.cw()
        .args(&["chore", "list"])
        .passes()
        .stdout_eq("No chores\n");
}

#[test]
fn add_assigns_first_rotation_member() {
    let home = Household::empty();

    home.cw()
        .args(&["chore", "add", "Dishes", "--recurring", "--rotate", "ann,bob,cat"])
        .passes()
        .stdout_has("Added chore Dishes")
        .stdout_has("First up: ann");
}

#[test]
fn chore_list_shows_schedule_and_members() {
    let home = Household::empty();
    home.add_chore(&["Vacuum", "--days", "1,3,5", "--rotate", "ann,bob"]);

    home.cw()
        .args(&["chore", "list"])
        .passes()
        .stdout_has("Vacuum")
        .stdout_has("weekly on Mon,Wed,Fri")
        .stdout_has("ann,bob");
}

#[test]
fn chore_show_by_prefix() {
    let home = Household::empty();
    let id = home.add_chore(&["Dishes", "--rotate", "ann,bob", "--due-time", "19:00"]);

    home.cw()
        .args(&["chore", "show", &id[..8]])
        .passes()
        .stdout_has(&format!("Chore: {}", id))
        .stdout_has("Rotation: ann, bob")
        .stdout_has("Due time: 19:00")
        .stdout_has("Pending:");
}

#[test]
fn state_persists_between_invocations() {
    let home = Household::empty();
    let id = home.add_chore(&["Trash", "--frequency", "weekly", "--member", "dad"]);

    let listed = home
        .cw()
        .args(&["--format", "json", "list", "--pending"])
        .passes()
        .json();

    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["chore_definition_id"], id.as_str());
    assert_eq!(listed[0]["assigned_member_id"], "dad");
}
