//! Configuration errors

use super::RcwrapError;

/// Creates an invalid encoding error for the npm configuration dump
pub fn invalid_encoding(reason: impl ToString) -> RcwrapError {
    RcwrapError::ConfigInvalidEncoding {
        reason: reason.to_string(),
    }
}

/// Creates a settings not found error
pub fn settings_not_found(path: impl Into<String>) -> RcwrapError {
    RcwrapError::SettingsNotFound { path: path.into() }
}

/// Creates a settings parse failed error
pub fn settings_parse_failed(path: impl Into<String>, reason: impl ToString) -> RcwrapError {
    RcwrapError::SettingsParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid settings error
pub fn settings_invalid(message: impl Into<String>) -> RcwrapError {
    RcwrapError::SettingsInvalid {
        message: message.into(),
    }
}
