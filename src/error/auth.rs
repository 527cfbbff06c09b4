//! Registry authentication errors

use super::RcwrapError;

/// Creates an authentication failed error
pub fn failed(message: impl Into<String>) -> RcwrapError {
    RcwrapError::AuthFailed {
        message: message.into(),
    }
}

/// Creates an unsupported auth mode error
pub fn unsupported_mode(mode: impl Into<String>) -> RcwrapError {
    RcwrapError::UnsupportedAuthMode { mode: mode.into() }
}
