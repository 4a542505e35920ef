//! Behavioral specifications for the cw CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// chore/
#[path = "specs/chore/add.rs"]
mod chore_add;
#[path = "specs/chore/remove.rs"]
mod chore_remove;

// instance/
#[path = "specs/instance/done.rs"]
mod instance_done;
#[path = "specs/instance/undo.rs"]
mod instance_undo;
