//! Serialization of the project override file

use crate::error::{RcwrapError, Result};

/// Final contents of the project `.npmrc` override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideConfig {
    bytes: Vec<u8>,
}

impl OverrideConfig {
    /// Concatenate the transformed lines with the synthesized settings
    ///
    /// The JSON flag, registry and credential are written last, in that
    /// order, so they take precedence over any earlier line with the same key.
    pub fn compose(lines: &[String], json: bool, registry: &str, credential: &str) -> Result<Self> {
        let credential = credential.trim_end_matches(['\r', '\n']);
        if credential.trim().is_empty() {
            return Err(RcwrapError::MissingCredential);
        }

        let mut out = String::new();
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("json = {json}\n"));
        out.push_str(&format!("registry = {registry}\n"));
        out.push_str(credential);
        out.push('\n');

        Ok(Self {
            bytes: out.into_bytes(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_lines_are_appended_in_order() {
        let lines = vec!["fund = false".to_string()];
        let config =
            OverrideConfig::compose(&lines, true, "https://auth", "//auth/:_authToken=t").unwrap();
        assert_eq!(
            String::from_utf8(config.as_bytes().to_vec()).unwrap(),
            "fund = false\njson = true\nregistry = https://auth\n//auth/:_authToken=t\n"
        );
    }

    #[test]
    fn test_json_false() {
        let config = OverrideConfig::compose(&[], false, "https://auth", "//auth.line").unwrap();
        assert!(
            String::from_utf8_lossy(config.as_bytes()).starts_with("json = false\n"),
            "json flag should be the first line"
        );
    }

    #[test]
    fn test_credential_trailing_newline_is_not_doubled() {
        let config = OverrideConfig::compose(&[], true, "https://auth", "//auth.line\n").unwrap();
        assert!(String::from_utf8_lossy(config.as_bytes()).ends_with("//auth.line\n"));
        assert!(!String::from_utf8_lossy(config.as_bytes()).ends_with("\n\n"));
    }

    #[test]
    fn test_empty_credential_is_rejected() {
        let result = OverrideConfig::compose(&[], true, "https://auth", "  \n");
        assert!(matches!(result, Err(RcwrapError::MissingCredential)));
    }
}
