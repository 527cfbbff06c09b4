//! File system errors

use std::path::Path;

use super::RcwrapError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> RcwrapError {
    RcwrapError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> RcwrapError {
    RcwrapError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a backup failed error
pub fn backup_failed(path: &Path, reason: impl ToString) -> RcwrapError {
    RcwrapError::BackupFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a restore failed error
pub fn restore_failed(path: &Path, reason: impl ToString) -> RcwrapError {
    RcwrapError::RestoreFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> RcwrapError {
    RcwrapError::IoError {
        message: message.into(),
    }
}
