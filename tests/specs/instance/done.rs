//! Completion specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn done_rotates_to_next_member() {
    let home = Household::empty();
    let chore = home.add_chore(&["Dishes", "--recurring", "--rotate", "ann,bob,cat"]);
    let first = home.pending_of(&chore);

    home.cw()
        .args(&["done", &first])
        .passes()
        .stdout_has("Completed Dishes for ann")
        .stdout_has("Reward: rwd-1")
        .stdout_has("Next: bob");

    let second = home.pending_of(&chore);
    home.cw()
        .args(&["done", &second])
        .passes()
        .stdout_has("Next: cat");
}

#[test]
fn done_twice_fails_without_second_reward() {
    let home = Household::empty();
    let chore = home.add_chore(&["Dishes", "--recurring", "--rotate", "ann,bob"]);
    let first = home.pending_of(&chore);
    home.cw().args(&["done", &first]).passes();

    home.cw()
        .args(&["done", &first])
        .fails()
        .stderr_has("already completed")
        .stderr_has("cw undo");

    home.cw()
        .args(&["--format", "json", "rewards"])
        .passes()
        .stdout_has("\"rewards\": 1");
}

#[test]
fn one_off_chore_is_not_rescheduled() {
    let home = Household::empty();
    let chore = home.add_chore(&["Fix sink", "--member", "dad"]);
    let only = home.pending_of(&chore);

    home.cw()
        .args(&["done", &only])
        .passes()
        .stdout_lacks("Next:");

    home.cw()
        .args(&["list", "--pending"])
        .passes()
        .stdout_eq("No chore instances\n");
}

#[test]
fn reward_uses_configured_text() {
    let home = Household::empty();
    home.file(
        "config.toml",
        "awarded_by = \"mom\"\nreward_reason = \"Thanks for doing {name}\"\n",
    );
    let chore = home.add_chore(&["Dishes", "--member", "ann"]);
    let only = home.pending_of(&chore);
    home.cw().args(&["done", &only]).passes();

    let rewards = home
        .cw()
        .args(&["--format", "json", "rewards", "--member", "ann"])
        .passes()
        .json();

    assert_eq!(rewards[0]["reason"], "Thanks for doing Dishes");
    assert_eq!(rewards[0]["awarded_by"], "mom");
}
