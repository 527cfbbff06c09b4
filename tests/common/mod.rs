//! Common test utilities for rcwrap integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Registry used by every test settings file
#[allow(dead_code)]
pub const REGISTRY: &str = "https://acme.jfrog.io/artifactory/api/npm/npm-virtual/";

/// Credential line rcwrap derives from [`REGISTRY`] and the test token
#[allow(dead_code)]
pub const CREDENTIAL_LINE: &str =
    "//acme.jfrog.io/artifactory/api/npm/npm-virtual/:_authToken=test-token";

/// A project directory plus a fake npm executable
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
    /// Directory holding the fake npm and its canned output
    pub bin: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        Self { temp, path, bin }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write rcwrap.yaml with a token for [`REGISTRY`]
    pub fn write_settings(&self) {
        self.write_file(
            "rcwrap.yaml",
            &format!("registry: {REGISTRY}\nauth:\n  type: token\n  token: test-token\n"),
        );
    }

    /// Install a fake npm that prints `config_list` for `npm config list`
    /// and `json` for `npm config get json`
    ///
    /// Any other invocation copies the project .npmrc to `npmrc-seen` next
    /// to the fake npm and exits with `$FAKE_NPM_EXIT` (default 0).
    #[cfg(unix)]
    pub fn install_fake_npm(&self, config_list: &str, json: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        std::fs::write(self.bin.join("config-list.txt"), config_list)
            .expect("Failed to write canned config list");

        let script = self.bin.join("npm");
        let body = format!(
            "#!/bin/sh\n\
             here=\"$(dirname \"$0\")\"\n\
             case \"$1 $2\" in\n  \
               \"config list\") cat \"$here/config-list.txt\" ;;\n  \
               \"config get\") echo '{json}' ;;\n  \
               *) cp .npmrc \"$here/npmrc-seen\" 2>/dev/null; echo \"fake npm $*\"; exit \"${{FAKE_NPM_EXIT:-0}}\" ;;\n\
             esac\n"
        );
        std::fs::write(&script, body).expect("Failed to write fake npm");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake npm executable");
        script
    }

    /// The .npmrc the fake npm saw while running
    pub fn npmrc_seen_by_npm(&self) -> Option<String> {
        std::fs::read_to_string(self.bin.join("npmrc-seen")).ok()
    }

    /// Backup file left by `rcwrap rewrite`
    pub fn backup_path(&self) -> PathBuf {
        self.path.join("rcwrap.npmrc.backup")
    }

    pub fn project(&self) -> &Path {
        &self.path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
