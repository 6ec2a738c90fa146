#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

/// An isolated HOME plus a database path inside it.
pub struct Sandbox {
    pub home: TempDir,
    pub db: String,
}

impl Sandbox {
    /// Command with HOME pointed at the sandbox and `--db` already set.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("caresync");
        cmd.env("HOME", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db]);
        cmd
    }
}

/// Fresh sandbox with the schema created via `--test init`.
pub fn setup_sandbox() -> Sandbox {
    let home = TempDir::new().expect("create temp home");
    let db = home
        .path()
        .join("caresync_test.sqlite")
        .to_string_lossy()
        .to_string();
    let sb = Sandbox { home, db };

    sb.cmd().args(["--test", "init"]).assert().success();
    sb
}

/// Add a task with an explicit id.
pub fn add_task(sb: &Sandbox, id: &str, time: &str, title: &str) {
    sb.cmd()
        .args(["task", "add", "--id", id, "--time", time, "--title", title])
        .assert()
        .success();
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().expect("run caresync");
    assert!(out.status.success(), "command failed: {:?}", out);
    String::from_utf8_lossy(&out.stdout).to_string()
}
