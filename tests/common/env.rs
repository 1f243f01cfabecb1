//! Test environment builder for isolated plantsafe runs.
//!
//! Each `TestEnv` owns a temp working directory, a temp home and a temp data
//! directory, and pins the clock through `PLANTSAFE_NOW` so demo data and
//! due dates are reproducible.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Default frozen instant: a Wednesday in Q2 (yellow tags)
pub const DEFAULT_NOW: &str = "2026-05-06T09:00:00Z";

/// Result of running the plantsafe binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }

    /// The first event with this name
    pub fn event(&self, name: &str) -> Value {
        self.events()
            .into_iter()
            .find(|e| e["event"] == name)
            .unwrap_or_else(|| panic!("no '{name}' event in:\n{}", self.stdout))
    }
}

pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    pub data_dir: TempDir,
    now: String,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::at(DEFAULT_NOW)
    }

    /// Environment whose clock is frozen at `now`
    pub fn at(now: &str) -> Self {
        Self {
            work_dir: TempDir::new().expect("create work dir"),
            home_dir: TempDir::new().expect("create home dir"),
            data_dir: TempDir::new().expect("create data dir"),
            now: now.to_string(),
        }
    }

    /// A site set up with the demo register and signed in as `role`
    pub fn with_demo(role: &str, pin: &str) -> Self {
        let env = Self::new();
        let init = env.run(&["init", "--demo"]);
        assert!(init.is_success(), "init failed:\n{}", init.combined_output());
        let login = env.run(&["login", role, "--pin", pin]);
        assert!(login.is_success(), "login failed:\n{}", login.combined_output());
        env
    }

    pub fn set_now(&mut self, now: &str) {
        self.now = now.to_string();
    }

    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    pub fn write_work_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create directories");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    fn command(&self, cwd: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_plantsafe"));
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("PLANTSAFE_SITE")
            .env_remove("PLANTSAFE_LOG")
            .env_remove("PLANTSAFE_REQUIRE_LOGIN")
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("PLANTSAFE_DATA_DIR", self.data_dir.path())
            .env("PLANTSAFE_NOW", &self.now)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.work_dir.path(), args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null());
        to_result(cmd.output().expect("failed to execute plantsafe"))
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut cmd = self.command(self.work_dir.path(), args);
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = cmd.spawn().expect("failed to spawn plantsafe");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("write stdin");
        to_result(child.wait_with_output().expect("wait for plantsafe"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
