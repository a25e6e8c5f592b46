//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a temp dir holding `config.toml` and a `data/`
/// directory of dataset files.
///
/// # Example
/// ```no_run
/// use tabula_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new()
///     .with_dataset("days", &fixtures::weekday_tickets())
///     .with_catalog_entry("days", "days.json", Some("Busy days"));
///
/// let result = world.run(&["show", "days"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    catalog: BTreeMap<String, (String, Option<String>)>,
    display: Vec<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let world = Self {
            temp_dir,
            data_dir,
            catalog: BTreeMap::new(),
            display: Vec::new(),
            env_vars: HashMap::new(),
        };
        world.write_config().expect("Failed to write config");
        world
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of a dataset file written by [`TestWorld::with_dataset`].
    pub fn dataset_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }

    /// Write `value` to `data/<name>.json`.
    pub fn with_dataset(self, name: &str, value: &Value) -> Self {
        let text = serde_json::to_string_pretty(value).expect("Failed to serialize dataset");
        self.with_raw_dataset(name, &text)
    }

    /// Write `text` verbatim, for malformed input.
    pub fn with_raw_dataset(self, name: &str, text: &str) -> Self {
        std::fs::write(self.dataset_path(name), text).expect("Failed to write dataset");
        self
    }

    /// Register `data/<file>` under `key` in the config catalog.
    pub fn with_catalog_entry(mut self, key: &str, file: &str, title: Option<&str>) -> Self {
        self.catalog.insert(
            key.to_string(),
            (format!("data/{}", file), title.map(String::from)),
        );
        self.write_config().expect("Failed to write config");
        self
    }

    /// Add a raw `key = value` line to the `[display]` table.
    pub fn with_display(mut self, line: &str) -> Self {
        self.display.push(line.to_string());
        self.write_config().expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    fn write_config(&self) -> Result<()> {
        let mut text = String::from("[display]\n");
        for line in &self.display {
            text.push_str(line);
            text.push('\n');
        }
        for (key, (path, title)) in &self.catalog {
            text.push_str(&format!("\n[datasets.{}]\n", key));
            if let Some(title) = title {
                text.push_str(&format!("title = {:?}\n", title));
            }
            text.push_str(&format!("path = {:?}\n", path));
        }
        std::fs::write(self.config_path(), text)?;
        Ok(())
    }

    /// Point a command at this world's config and strip ambient settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(self.config_path());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TABULA_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the `tabula` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tabula")
            .map_err(|e| anyhow::anyhow!("Failed to find tabula binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` appended.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut args = args.to_vec();
        args.extend(["--format", "json"]);
        self.run(&args)
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

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
