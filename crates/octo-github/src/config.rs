//! Client configuration.
//!
//! [`Configuration`] is what every request is built from: the API base URL,
//! the resolved token and the fixed headers GitHub expects. [`ConfigFile`]
//! is the on-disk TOML form users edit.

use std::fs;
use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use tracing::debug;

use crate::auth::Auth;
use crate::error::{Error, Result};

/// Settings shared by every request issued through a client.
///
/// Read-only once built; clients hold it behind an `Arc` so concurrent
/// requests share one copy.
#[derive(Debug, Clone)]
pub struct Configuration {
    api_url: String,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: Option<SecretString>,
    user_agent: String,
    api_version: String,
}

impl Configuration {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Default `User-Agent` header value.
    pub const DEFAULT_USER_AGENT: &'static str = "octo-cli";

    /// REST API version sent in `X-GitHub-Api-Version`.
    pub const DEFAULT_API_VERSION: &'static str = "2022-11-28";

    /// Create a configuration for github.com.
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn new(auth: &Auth) -> Result<Self> {
        Ok(Self::from_token(auth.resolve()?))
    }

    /// Create a configuration from an already-resolved token.
    #[must_use]
    pub fn from_token(token: Option<SecretString>) -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            token,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Use a custom API URL (for GitHub Enterprise or tests).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// API base URL, without trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Token sent as a bearer credential, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `X-GitHub-Api-Version` header value.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

/// Configuration file loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// GitHub-specific settings.
    #[serde(default)]
    pub github: GitHubSettings,
}

/// GitHub-specific settings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GitHubSettings {
    /// Custom API URL for GitHub Enterprise.
    pub api_url: Option<String>,

    /// Custom `User-Agent` header.
    pub user_agent: Option<String>,
}

impl ConfigFile {
    /// Load config from a TOML file.
    ///
    /// A missing file yields the default config.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply these settings on top of a configuration.
    #[must_use]
    pub fn apply(&self, mut config: Configuration) -> Configuration {
        if let Some(url) = &self.github.api_url {
            config = config.with_api_url(url.as_str());
        }
        if let Some(agent) = &self.github.user_agent {
            config = config.with_user_agent(agent.as_str());
        }
        config
    }
}
