//! Authentication handling for GitHub API.

use std::process::Command;

use secrecy::SecretString;

use crate::error::{Error, Result};

/// Environment variable checked first by [`Auth::auto`].
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Authentication method for GitHub API.
#[derive(Debug, Clone)]
pub enum Auth {
    /// Use token from gh CLI.
    GhCli,

    /// Use token from environment variable.
    EnvVar(String),

    /// Use a specific token.
    Token(SecretString),

    /// Send requests without credentials.
    ///
    /// Search works unauthenticated, under a lower rate limit.
    Anonymous,
}

impl Auth {
    /// Create auth from the first available method.
    ///
    /// Tries in order: `GITHUB_TOKEN` env var, gh CLI.
    #[must_use]
    pub fn auto() -> Self {
        if std::env::var(TOKEN_ENV_VAR).is_ok() {
            Self::EnvVar(TOKEN_ENV_VAR.into())
        } else {
            Self::GhCli
        }
    }

    /// Resolve the authentication to a token.
    ///
    /// Returns `None` for [`Auth::Anonymous`].
    ///
    /// # Errors
    /// Returns error if token cannot be obtained.
    pub fn resolve(&self) -> Result<Option<SecretString>> {
        match self {
            Self::GhCli => get_gh_token().map(Some),
            Self::EnvVar(var) => std::env::var(var)
                .ok()
                .filter(|t| !t.trim().is_empty())
                .map(|t| Some(SecretString::from(t)))
                .ok_or(Error::NoToken),
            Self::Token(t) => Ok(Some(t.clone())),
            Self::Anonymous => Ok(None),
        }
    }
}

impl Default for Auth {
    fn default() -> Self {
        Self::auto()
    }
}

/// Get GitHub token from gh CLI.
fn get_gh_token() -> Result<SecretString> {
    let output = Command::new("gh").args(["auth", "token"]).output()?;

    if !output.status.success() {
        return Err(Error::NoToken);
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();

    if token.is_empty() {
        return Err(Error::NoToken);
    }

    Ok(SecretString::from(token))
}
