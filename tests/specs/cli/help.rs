//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let home = Household::empty();

    home.cw()
        .args(&["--help"])
        .passes()
        .stdout_has("chore")
        .stdout_has("done")
        .stdout_has("undo")
        .stdout_has("rewards");
}

#[test]
fn chore_add_help_lists_schedule_flags() {
    let home = Household::empty();

    home.cw()
        .args(&["chore", "add", "--help"])
        .passes()
        .stdout_has("--frequency")
        .stdout_has("--days")
        .stdout_has("--rotate")
        .stdout_has("--due-time");
}

#[test]
fn completions_need_no_state() {
    let home = Household::empty();

    home.cw()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("cw");
}
