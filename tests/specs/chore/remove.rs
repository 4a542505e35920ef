//! Chore deletion specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn rm_deletes_pending_instance_and_keeps_history() {
    let home = Household::empty();
    let chore = home.add_chore(&["Dishes", "--recurring", "--rotate", "ann,bob"]);
    let first = home.pending_of(&chore);
    home.cw().args(&["done", &first]).passes();

    home.cw()
        .args(&["chore", "rm", &chore])
        .passes()
        .stdout_has("Deleted chore Dishes");

    home.cw()
        .args(&["list", "--pending"])
        .passes()
        .stdout_eq("No chore instances\n");
    home.cw()
        .args(&["list"])
        .passes()
        .stdout_has("(deleted)")
        .stdout_has("completed");
    home.cw()
        .args(&["rewards"])
        .passes()
        .stdout_has("ann");
}

#[test]
fn rm_honors_json_format() {
    let home = Household::empty();
    let chore = home.add_chore(&["Dishes", "--member", "ann"]);

    let deleted = home
        .cw()
        .args(&["--format", "json", "chore", "rm", &chore])
        .passes()
        .json();

    assert_eq!(deleted["id"], chore.as_str());
    assert_eq!(deleted["name"], "Dishes");
}

#[test]
fn rm_unknown_chore_fails() {
    let home = Household::empty();

    home.cw()
        .args(&["chore", "rm", "chr-nope"])
        .fails()
        .stderr_has("Chore 'chr-nope' not found");
}
