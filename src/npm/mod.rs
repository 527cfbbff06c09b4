//! npm client access
//!
//! rcwrap only needs two things from npm: the full configuration dump and
//! single settings. Both go through [`NpmClient`] so the rewrite can run
//! against a stub in tests.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output};

use tracing::debug;

use crate::error::{Result, process};

/// Default npm executable, looked up on PATH
pub const DEFAULT_NPM: &str = "npm";

/// Source of npm configuration
pub trait NpmClient {
    /// Raw `npm config list` output
    fn config_list(&self) -> Result<Vec<u8>>;

    /// Value of a single setting as npm reports it
    fn config_get(&self, key: &str) -> Result<String>;
}

/// Whether npm output should stay in JSON mode
///
/// Any value other than the literal `false` counts as enabled: with
/// `--json=<not a boolean>` npm treats json as set but reports the raw value.
pub fn resolve_json_flag(npm: &dyn NpmClient) -> Result<bool> {
    let value = npm.config_get("json")?;
    Ok(value.trim() != "false")
}

/// [`NpmClient`] backed by the npm executable
#[derive(Debug, Clone)]
pub struct NpmCli {
    program: PathBuf,
    /// Directory npm runs in, so it picks up that project's `.npmrc`
    dir: Option<PathBuf>,
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new(DEFAULT_NPM)
    }
}

impl NpmCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dir: None,
        }
    }

    /// Run configuration queries inside `dir`
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run npm with inherited stdio inside `dir`
    pub fn run<I, S>(&self, dir: &Path, args: I) -> Result<ExitStatus>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.args(args).current_dir(dir);
        debug!(npm = %self.program.display(), dir = %dir.display(), "running npm");
        command.status().map_err(|e| self.spawn_error("run", &e))
    }

    fn output(&self, description: &str, args: &[&str]) -> Result<Output> {
        debug!(npm = %self.program.display(), ?args, "invoking npm");
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }
        let output = command
            .output()
            .map_err(|e| self.spawn_error(description, &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(process::command_failed(
                description,
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(output)
    }

    fn spawn_error(&self, description: &str, err: &io::Error) -> crate::error::RcwrapError {
        if err.kind() == io::ErrorKind::NotFound {
            process::npm_not_found(self.program.display().to_string())
        } else {
            process::command_failed(description, err.to_string())
        }
    }
}

impl NpmClient for NpmCli {
    fn config_list(&self) -> Result<Vec<u8>> {
        Ok(self
            .output("config list", &["config", "list", "--json=false"])?
            .stdout)
    }

    fn config_get(&self, key: &str) -> Result<String> {
        let output = self.output("config get", &["config", "get", key])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
