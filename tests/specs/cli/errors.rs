//! Error reporting specs
//!
//! Engine errors exit non-zero with a message and suggestions on stderr.

use crate::prelude::*;

#[test]
fn done_unknown_instance_fails() {
    let home = Household::empty();

    home.cw()
        .args(&["done", "inst-nope"])
        .fails()
        .stderr_has("error: Chore instance 'inst-nope' not found")
        .stderr_has("cw list");
}

#[test]
fn chore_without_members_is_a_configuration_gap() {
    let home = Household::empty();

    home.cw()
        .args(&["chore", "add", "Lawn", "--frequency", "weekly"])
        .fails()
        .stderr_has("Nobody can be assigned 'Lawn'");

    home.cw()
        .args(&["chore", "list"])
        .passes()
        .stdout_eq("No chores\n");
}

#[test]
fn zero_interval_is_rejected() {
    let home = Household::empty();

    home.cw()
        .args(&["chore", "add", "Dishes", "--interval", "0", "--member", "ann"])
        .fails()
        .stderr_has("interval must be at least 1");
}

#[test]
fn malformed_config_is_reported() {
    let home = Household::empty();
    home.file("config.toml", "awarded_by = [");

    home.cw()
        .args(&["chore", "list"])
        .fails()
        .stderr_has("config.toml");
}
