//! Test helpers for behavioral specifications.
//!
//! Every `Household` owns a fresh state directory; commands run through it
//! see only that household's chores and rewards.

use assert_cmd::Command;
use std::path::Path;

pub use similar_asserts::assert_eq;

/// An isolated chorewheel state directory
pub struct Household {
    dir: tempfile::TempDir,
}

impl Household {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the state directory
    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// A `cw` invocation against this household
    pub fn cw(&self) -> CliBuilder {
        CliBuilder {
            state_dir: self.dir.path().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add a chore and return its id
    pub fn add_chore(&self, args: &[&str]) -> String {
        let mut argv = vec!["--format", "json", "chore", "add"];
        argv.extend_from_slice(args);
        self.cw().args(&argv).passes().json()["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    /// Id of the chore's pending instance
    pub fn pending_of(&self, chore: &str) -> String {
        let listed = self
            .cw()
            .args(&["--format", "json", "list", "--pending", "--chore", chore])
            .passes()
            .json();
        listed[0]["id"].as_str().unwrap().to_string()
    }
}

pub struct CliBuilder {
    state_dir: std::path::PathBuf,
    args: Vec<String>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    fn run(self) -> std::process::Output {
        Command::cargo_bin("cw")
            .unwrap()
            .env_remove("CW_LOG")
            .env("CW_STATE_DIR", &self.state_dir)
            .args(&self.args)
            .output()
            .unwrap()
    }

    /// Run and require exit status 0
    pub fn passes(self) -> RunAssert {
        let cmd = self.args.join(" ");
        let output = self.run();
        let run = RunAssert::from(output);
        assert!(
            run.success,
            "`cw {}` failed\nstdout:\n{}\nstderr:\n{}",
            cmd, run.stdout, run.stderr
        );
        run
    }

    /// Run and require a non-zero exit status
    pub fn fails(self) -> RunAssert {
        let cmd = self.args.join(" ");
        let output = self.run();
        let run = RunAssert::from(output);
        assert!(
            !run.success,
            "`cw {}` unexpectedly passed\nstdout:\n{}",
            cmd, run.stdout
        );
        run
    }
}

pub struct RunAssert {
    success: bool,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
