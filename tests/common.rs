#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

pub const USER: &str = "foreman";

/// An isolated home directory with its own database file.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("crewledger.sqlite").to_string_lossy().to_string();
        Self { dir, db }
    }

    /// Command bound to this environment's home and database, with an identity.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("crewledger");
        cmd.env("CREWLEDGER_HOME", self.dir.path())
            .env("CREWLEDGER_USER", USER)
            .args(["--db", &self.db]);
        cmd
    }

    /// Same as `cmd` but with no operator identity in the environment.
    pub fn anonymous(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env_remove("CREWLEDGER_USER");
        cmd
    }

    pub fn out_file(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }
}

/// Initialized database with a two-person crew.
pub fn env_with_crew() -> TestEnv {
    let env = TestEnv::new();
    env.cmd().args(["--test", "init"]).assert().success();

    env.cmd()
        .args(["worker", "add", "amy", "--name", "Amy Ng", "--rate", "20"])
        .assert()
        .success();
    env.cmd()
        .args(["worker", "add", "bob", "--name", "Bob Ruiz", "--rate", "30"])
        .assert()
        .success();

    env
}

/// Crew plus one stored week (2025-03-03..07, default 07:00-16:00, 60 min break).
pub fn env_with_week() -> TestEnv {
    let env = env_with_crew();
    env.cmd()
        .args([
            "bulk", "-w", "amy", "-w", "bob", "--from", "2025-03-03", "--to", "2025-03-07",
            "--task", "framing",
        ])
        .assert()
        .success();
    env
}
