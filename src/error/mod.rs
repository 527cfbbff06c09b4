//! Error types and handling for rcwrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`process`]: npm process errors
//! - [`fs`]: File system, backup and restore errors
//! - [`auth`]: Registry authentication errors
//! - [`config`]: Configuration dump and settings errors

pub mod auth;
pub mod config;
pub mod fs;
pub mod process;


use miette::Diagnostic;
use thiserror::Error;

/// Broad category of a failure, used by callers that only care about the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// External command unavailable or non-zero exit
    Process,
    /// Read, write or rename failures on the override or backup files
    Io,
    /// Credential resolution failures, including unsupported auth modes
    Auth,
    /// Unusable configuration input or settings
    Config,
}

/// Main error type for rcwrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum RcwrapError {
    // Process errors
    #[error("npm executable not found: {program}")]
    #[diagnostic(
        code(rcwrap::process::npm_not_found),
        help("Install npm or point rcwrap at it with --npm or the `npm` setting")
    )]
    NpmNotFound { program: String },

    #[error("npm {command} failed: {reason}")]
    #[diagnostic(code(rcwrap::process::command_failed))]
    NpmCommandFailed { command: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(rcwrap::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(rcwrap::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to back up {path}: {reason}")]
    #[diagnostic(code(rcwrap::fs::backup_failed))]
    BackupFailed { path: String, reason: String },

    #[error("Failed to restore {path}: {reason}")]
    #[diagnostic(
        code(rcwrap::fs::restore_failed),
        help("Run 'rcwrap restore' once the underlying problem is fixed")
    )]
    RestoreFailed { path: String, reason: String },

    #[error("Restored file does not match its backup: {path}")]
    #[diagnostic(code(rcwrap::fs::restore_mismatch))]
    RestoreMismatch { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(rcwrap::fs::io_error))]
    IoError { message: String },

    // Authentication errors
    #[error("Registry authentication failed: {message}")]
    #[diagnostic(code(rcwrap::auth::failed))]
    AuthFailed { message: String },

    #[error("{mode} authentication is not supported by this command")]
    #[diagnostic(
        code(rcwrap::auth::unsupported_mode),
        help("Configure an access token (auth.type: token)")
    )]
    UnsupportedAuthMode { mode: String },

    #[error("No registry credential available")]
    #[diagnostic(
        code(rcwrap::auth::missing_credential),
        help("Set auth.token, auth.token_env or the RCWRAP_TOKEN environment variable")
    )]
    MissingCredential,

    // Configuration errors
    #[error("npm configuration output is not valid UTF-8: {reason}")]
    #[diagnostic(code(rcwrap::config::invalid_encoding))]
    ConfigInvalidEncoding { reason: String },

    #[error("Settings file not found: {path}")]
    #[diagnostic(
        code(rcwrap::config::settings_not_found),
        help("Create rcwrap.yaml in the project or pass --config <path>")
    )]
    SettingsNotFound { path: String },

    #[error("Failed to parse settings file: {path}: {reason}")]
    #[diagnostic(code(rcwrap::config::settings_parse_failed))]
    SettingsParseFailed { path: String, reason: String },

    #[error("Invalid settings: {message}")]
    #[diagnostic(code(rcwrap::config::settings_invalid))]
    SettingsInvalid { message: String },

    // A failure whose cleanup also failed
    #[error("Two errors occurred:\n  {restore}\n  {original}")]
    #[diagnostic(
        code(rcwrap::rollback_failed),
        help("The project .npmrc may still be the generated override; run 'rcwrap restore'")
    )]
    RollbackFailed {
        original: Box<RcwrapError>,
        restore: Box<RcwrapError>,
    },
}

impl RcwrapError {
    /// Error domain of this failure
    ///
    /// A combined rollback failure reports the domain of the error that
    /// triggered the rollback.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NpmNotFound { .. } | Self::NpmCommandFailed { .. } => ErrorKind::Process,
            Self::FileReadFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::BackupFailed { .. }
            | Self::RestoreFailed { .. }
            | Self::RestoreMismatch { .. }
            | Self::IoError { .. } => ErrorKind::Io,
            Self::AuthFailed { .. } | Self::UnsupportedAuthMode { .. } | Self::MissingCredential => {
                ErrorKind::Auth
            }
            Self::ConfigInvalidEncoding { .. }
            | Self::SettingsNotFound { .. }
            | Self::SettingsParseFailed { .. }
            | Self::SettingsInvalid { .. } => ErrorKind::Config,
            Self::RollbackFailed { original, .. } => original.kind(),
        }
    }

    /// Combine an operation failure with the failure of the restore that followed it
    pub fn with_restore_failure(self, restore: RcwrapError) -> Self {
        Self::RollbackFailed {
            original: Box::new(self),
            restore: Box::new(restore),
        }
    }
}

impl From<std::io::Error> for RcwrapError {
    fn from(err: std::io::Error) -> Self {
        RcwrapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RcwrapError {
    fn from(err: serde_yaml::Error) -> Self {
        RcwrapError::SettingsParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RcwrapError>;
