//! Scratch directories for unit tests
//!
//! Always rooted at an absolute path, so a relative TMPDIR (e.g. `tmp`)
//! never puts test projects under the current working directory.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

fn base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        return dir;
    }
    #[cfg(windows)]
    {
        env::var("TEMP")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Fresh empty directory, removed on drop
pub fn tempdir() -> TempDir {
    TempDir::new_in(base()).expect("create scratch directory")
}
