//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Isolated data directory plus a `pantry` command pointed at it.
///
/// # Example
/// ```no_run
/// use pantry_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog();
/// let result = world.run(&["recipes", "--category", "breakfast"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".pantry");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Place the bundled English catalog at `<data>/recipes.json`.
    pub fn with_sample_catalog(self) -> Self {
        self.samples
            .copy_to("recipes.json", &self.data_dir.join("recipes.json"))
            .expect("Failed to copy sample catalog");
        self
    }

    /// Place a bundled locale catalog at `<data>/recipes/recipes-<tag>.json`.
    pub fn with_sample_locale(self, tag: &str) -> Self {
        let name = format!("recipes-{}.json", tag);
        self.samples
            .copy_to(&name, &self.data_dir.join("recipes").join(&name))
            .expect("Failed to copy sample locale catalog");
        self
    }

    /// Write arbitrary catalog JSON to `<data>/recipes.json`.
    pub fn with_catalog_json(self, json: &str) -> Self {
        std::fs::write(self.data_dir.join("recipes.json"), json)
            .expect("Failed to write catalog");
        self
    }

    /// Write `config.toml` in the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this environment's data dir and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("PANTRY_PATH");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `pantry` binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("pantry")
            .map_err(|e| anyhow::anyhow!("Failed to find pantry binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Same as [`TestWorld::run`] with `--format json` prepended.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        self.run(&full)
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
