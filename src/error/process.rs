//! npm process errors

use super::RcwrapError;

/// Creates an npm not found error
pub fn npm_not_found(program: impl Into<String>) -> RcwrapError {
    RcwrapError::NpmNotFound {
        program: program.into(),
    }
}

/// Creates an npm command failed error
pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> RcwrapError {
    RcwrapError::NpmCommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
