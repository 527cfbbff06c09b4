//! Registry authentication
//!
//! Resolves the registry npm should use and the credential line that lets
//! npm authenticate against it. Only access tokens can be written into an
//! `.npmrc`; other modes are rejected up front.

use url::Url;

use crate::error::{RcwrapError, Result, auth};
use crate::settings::{AuthMode, Settings};

/// Registry and credential written into the override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub registry: String,
    /// Ready-to-append `.npmrc` line
    pub credential_line: String,
}

/// Source of registry credentials
pub trait RegistryAuth {
    fn authenticate(&self) -> Result<Credentials>;
}

/// Token authentication configured through [`Settings`]
#[derive(Debug, Clone)]
pub struct TokenAuth {
    registry: Url,
    mode: AuthMode,
    token: Option<String>,
}

impl TokenAuth {
    pub fn new(registry: Url, mode: AuthMode, token: Option<String>) -> Self {
        Self {
            registry,
            mode,
            token,
        }
    }

    /// Build from settings, reading `auth.token_env` if no token is set inline
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let token = settings.auth.token.clone().or_else(|| {
            settings
                .auth
                .token_env
                .as_deref()
                .and_then(|name| std::env::var(name).ok())
        });
        Ok(Self::new(
            settings.registry_url()?,
            settings.auth.mode,
            token,
        ))
    }
}

impl RegistryAuth for TokenAuth {
    fn authenticate(&self) -> Result<Credentials> {
        if self.mode != AuthMode::Token {
            return Err(auth::unsupported_mode(self.mode.display_name()));
        }

        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(RcwrapError::MissingCredential)?;

        if token.contains(['\n', '\r']) {
            return Err(auth::failed("access token must be a single line"));
        }

        Ok(Credentials {
            registry: self.registry.to_string(),
            credential_line: format!("{}:_authToken={token}", registry_prefix(&self.registry)),
        })
    }
}

/// Protocol-relative prefix npm uses to scope credentials to a registry
///
/// `https://host:8443/api/npm/repo/` becomes `//host:8443/api/npm/repo/`.
pub fn registry_prefix(registry: &Url) -> String {
    let host = registry.host_str().unwrap_or_default();
    let port = registry.port().map(|p| format!(":{p}")).unwrap_or_default();
    let path = registry.path();
    let slash = if path.ends_with('/') { "" } else { "/" };
    format!("//{host}{port}{path}{slash}")
}
