//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory holding the data directory (where
//! `config.toml` and the browser log live) and, once a dataset is added, a
//! resource directory passed to the CLI with `--resources`.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::Dataset;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use moonshot_testing::{Dataset, TestWorld};
///
/// let world = TestWorld::new().with_dataset(Dataset::apollo_sample());
///
/// let result = world.run(&["missions", "--view", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    resource_dir: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment using the bundled catalog.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".moonshot");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            resource_dir: None,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn resource_dir(&self) -> Option<&Path> {
        self.resource_dir.as_deref()
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `dataset` to a resource directory and point the CLI at it.
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        let dir = self.temp_dir.path().join("resources");
        dataset
            .write_to(&dir)
            .expect("Failed to write dataset");
        self.resource_dir = Some(dir);
        self
    }

    /// Write a dataset somewhere inside the world without passing `--resources`.
    pub fn write_dataset(&self, relative: &str, dataset: &Dataset) -> PathBuf {
        let dir = self.temp_dir.path().join(relative);
        dataset
            .write_to(&dir)
            .expect("Failed to write dataset");
        dir
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), contents)
            .expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        if let Some(dir) = &self.resource_dir {
            cmd.arg("--resources").arg(dir);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("MOONSHOT_PATH");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// A configured `moonshot` command for `assert_cmd` assertions.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("moonshot")
            .map_err(|e| anyhow::anyhow!("Failed to find moonshot binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute `moonshot` with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
