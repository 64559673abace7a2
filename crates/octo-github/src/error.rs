//! Error types for octo-github.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub API operations.
///
/// Errors are reported as produced: a failed round trip surfaces the
/// underlying [`reqwest::Error`], a non-2xx status surfaces the status and
/// body text, and a body that does not match the expected shape surfaces the
/// [`serde_json::Error`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Token not found.
    #[error("no GitHub token found - run `gh auth login` or set GITHUB_TOKEN")]
    NoToken,

    /// API error with status code.
    #[error("GitHub API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured API URL cannot be combined with a route path.
    #[error("invalid API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A request was spawned outside of a tokio runtime.
    #[error("no async runtime available to run the request")]
    NoRuntime,

    /// Config file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// IO error (e.g., reading gh CLI token).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was produced while decoding a response body.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
