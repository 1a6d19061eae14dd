//! TestWorld pattern for driving the `git-ln` binary.
//!
//! Provides a fluent interface for:
//! - Creating an isolated home and config directory
//! - Writing a config file
//! - Optionally creating a real git repository with commits
//! - Executing the CLI with piped stdin

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use gitln_testing::TestWorld;
///
/// let world = TestWorld::new().with_config("marker = \"^\"\n");
/// let result = world.run_stdin(&["--stdin"], b"|\\\n").unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let home = base_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");

        let mut env_vars = HashMap::new();
        env_vars.insert("HOME".to_string(), home.display().to_string());
        env_vars.insert("XDG_CONFIG_HOME".to_string(), home.join(".config").display().to_string());
        env_vars.insert("GIT_CONFIG_NOSYSTEM".to_string(), "1".to_string());
        env_vars.insert("RUST_LOG".to_string(), "off".to_string());

        Self {
            cwd: base_path.clone(),
            config_path: base_path.join("gitln.toml"),
            temp_dir,
            env_vars,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write the config file passed to the CLI through `GITLN_CONFIG`.
    pub fn with_config(mut self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        let path = self.config_path.display().to_string();
        self.env_vars.insert("GITLN_CONFIG".to_string(), path);
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Whether a `git` executable is on PATH.
    pub fn git_available() -> bool {
        std::process::Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Create a repository in `repo/` with one commit per subject, and make
    /// it the working directory.
    pub fn with_git_repo(mut self, subjects: &[&str]) -> Result<Self> {
        let repo = self.temp_dir.path().join("repo");
        std::fs::create_dir_all(&repo)?;
        self.cwd = repo;

        self.git(&["init", "-q", "-b", "main"])?;
        for (i, subject) in subjects.iter().enumerate() {
            std::fs::write(self.cwd.join("file.txt"), format!("{}\n", i))?;
            self.git(&["add", "file.txt"])?;
            self.git(&["commit", "-q", "-m", subject])?;
        }
        Ok(self)
    }

    /// Run git inside the working directory with a fixed identity.
    pub fn git(&self, args: &[&str]) -> Result<String> {
        let output = std::process::Command::new("git")
            .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(&self.cwd)
            .envs(&self.env_vars)
            .output()
            .with_context(|| format!("Failed to run git {:?}", args))?;

        if !output.status.success() {
            anyhow::bail!(
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Configure a CLI command with this environment's cwd and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.cwd);
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute `git-ln` with the given arguments and no stdin.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_stdin(args, b"")
    }

    /// Execute `git-ln` with the given arguments, feeding `input` on stdin.
    ///
    /// This method uses `Command::cargo_bin()`, which finds the binary built
    /// by `cargo test`.
    #[allow(deprecated)]
    pub fn run_stdin(&self, args: &[&str], input: &[u8]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("git-ln")
            .map_err(|e| anyhow::anyhow!("Failed to find git-ln binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(input.to_vec());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of running the CLI.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
