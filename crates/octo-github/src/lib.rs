//! # octo-github
//!
//! Typed GitHub REST client. Builds issue search requests from optional
//! filters and decodes the paginated search envelope.
//!
//! ```no_run
//! use octo_github::{Auth, GitHubClient, IssueSearch};
//!
//! # async fn run() -> octo_github::Result<()> {
//! let client = GitHubClient::new(&Auth::Anonymous)?;
//! let results = client
//!     .search_issues(&IssueSearch::new().repo("octokit/octokit.swift"))
//!     .await?;
//! println!("{} of {} issues", results.len(), results.total_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which automatically
//! zeroizes memory when dropped, reducing credential exposure in memory dumps.

mod auth;
mod client;
mod config;
mod error;
pub mod router;
mod search;
pub mod session;
mod traits;
mod types;

pub use auth::{Auth, TOKEN_ENV_VAR};
pub use client::{GitHubClient, RequestHandle};
pub use config::{ConfigFile, Configuration, GitHubSettings};
pub use error::{Error, Result};
pub use search::{DEFAULT_ISSUE_TYPE, IssueSearch, Openness, SearchResults};
// Re-export SecretString for constructing Auth::Token
pub use secrecy::SecretString;
pub use traits::SearchApi;
pub use types::{Issue, IssueState, Label, Milestone, PullRequestLinks, User};
