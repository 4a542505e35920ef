//! Undo specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn undo_restores_assignee_and_revokes_reward() {
    let home = Household::empty();
    let chore = home.add_chore(&["Dishes", "--recurring", "--rotate", "ann,bob"]);
    let first = home.pending_of(&chore);
    home.cw().args(&["done", &first]).passes();

    home.cw()
        .args(&["undo", &first])
        .passes()
        .stdout_has("Reopened Dishes for ann");

    assert_eq!(home.pending_of(&chore), first);
    home.cw()
        .args(&["rewards"])
        .passes()
        .stdout_eq("No rewards\n");

    home.cw()
        .args(&["done", &first])
        .passes()
        .stdout_has("Next: bob");
}

#[test]
fn undo_pending_instance_fails() {
    let home = Household::empty();
    let chore = home.add_chore(&["Dishes", "--member", "ann"]);
    let only = home.pending_of(&chore);

    home.cw()
        .args(&["undo", &only])
        .fails()
        .stderr_has("is not completed");
}
