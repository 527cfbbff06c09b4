//! rcwrap settings (rcwrap.yaml) data structures and lookup
//!
//! Settings are looked up in order:
//! 1. An explicit path (`--config` or `RCWRAP_CONFIG`)
//! 2. `rcwrap.yaml` in the workspace
//! 3. `rcwrap/config.yaml` under the user's configuration directory
//!
//! `RCWRAP_REGISTRY` and `RCWRAP_TOKEN` override the file's values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Result, config, fs as fs_error};

/// Settings file name looked up in the workspace
pub const SETTINGS_FILE_NAME: &str = "rcwrap.yaml";

/// Directory under the user's configuration directory
const USER_SETTINGS_DIR: &str = "rcwrap";

/// File name under [`USER_SETTINGS_DIR`]
const USER_SETTINGS_FILE: &str = "config.yaml";

/// Environment variable overriding the registry URL
pub const REGISTRY_ENV: &str = "RCWRAP_REGISTRY";

/// Environment variable overriding the access token
pub const TOKEN_ENV: &str = "RCWRAP_TOKEN";

/// How rcwrap authenticates against the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Token,
    Basic,
    Ssh,
}

impl AuthMode {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Token => "Token",
            Self::Basic => "Basic",
            Self::Ssh => "SSH",
        }
    }
}

/// Authentication section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    #[serde(rename = "type", default)]
    pub mode: AuthMode,

    /// Access token written to the override
    #[serde(default)]
    pub token: Option<String>,

    /// Environment variable holding the access token
    #[serde(default)]
    pub token_env: Option<String>,
}

/// Settings file contents
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// npm registry URL as exposed by the artifact service
    pub registry: String,

    #[serde(default)]
    pub auth: AuthSettings,

    /// npm executable (defaults to `npm` on PATH)
    #[serde(default)]
    pub npm: Option<PathBuf>,

    /// Extra keys that must not be copied into the override
    #[serde(default)]
    pub deny_keys: Vec<String>,
}

impl Settings {
    /// Parse settings from YAML string
    #[cfg(test)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| config::settings_parse_failed(path.display().to_string(), e))
    }

    /// Find and load settings for `workspace`, then apply environment overrides
    pub fn load(explicit: Option<&Path>, workspace: &Path) -> Result<Self> {
        let path = locate(explicit, workspace)?;
        debug!(path = %path.display(), "loading settings");

        let mut settings = Self::from_file(&path)?;
        settings.apply_overrides(|name| std::env::var(name).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `RCWRAP_REGISTRY` / `RCWRAP_TOKEN` style overrides from `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(registry) = lookup(REGISTRY_ENV).filter(|v| !v.is_empty()) {
            self.registry = registry;
        }
        if let Some(token) = lookup(TOKEN_ENV).filter(|v| !v.is_empty()) {
            self.auth.token = Some(token);
        }
    }

    /// Check that the registry is a usable http(s) URL
    pub fn validate(&self) -> Result<()> {
        self.registry_url().map(|_| ())
    }

    /// Registry URL, normalized to end with `/`
    pub fn registry_url(&self) -> Result<Url> {
        let mut url = Url::parse(self.registry.trim()).map_err(|e| {
            config::settings_invalid(format!("registry '{}': {e}", self.registry))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(config::settings_invalid(format!(
                "registry '{}' must be an http(s) URL",
                self.registry
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// Resolve which settings file to use
pub fn locate(explicit: Option<&Path>, workspace: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(config::settings_not_found(path.display().to_string()));
    }

    let project = workspace.join(SETTINGS_FILE_NAME);
    if project.is_file() {
        return Ok(project);
    }

    if let Some(user) = dirs::config_dir().map(|d| d.join(USER_SETTINGS_DIR).join(USER_SETTINGS_FILE))
    {
        if user.is_file() {
            return Ok(user);
        }
    }

    Err(config::settings_not_found(project.display().to_string()))
}
