//! GitHub API types.
//!
//! Timestamps are RFC 3339 strings on the wire and decode into
//! [`chrono::DateTime<Utc>`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub issue, as returned by the issues and search endpoints.
///
/// Pull requests are issues too; see [`Issue::is_pull_request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue ID.
    pub id: u64,

    /// Issue number within its repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body.
    #[serde(default)]
    pub body: Option<String>,

    /// Issue state.
    pub state: IssueState,

    /// API URL of the issue.
    pub url: String,

    /// Browser URL of the issue.
    pub html_url: String,

    /// API URL of the owning repository.
    #[serde(default)]
    pub repository_url: Option<String>,

    /// Author of the issue.
    #[serde(default)]
    pub user: Option<User>,

    /// Labels applied to the issue.
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Users assigned to the issue.
    #[serde(default)]
    pub assignees: Vec<User>,

    /// Milestone, if any.
    #[serde(default)]
    pub milestone: Option<Milestone>,

    /// Number of comments.
    #[serde(default)]
    pub comments: u64,

    /// Whether the conversation is locked.
    #[serde(default)]
    pub locked: bool,

    /// Present when the issue is a pull request.
    #[serde(default)]
    pub pull_request: Option<PullRequestLinks>,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Last update time.
    pub updated_at: DateTime<Utc>,

    /// Close time, if closed.
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Whether this search hit is a pull request rather than an issue.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Owner/name of the repository, derived from `repository_url`.
    ///
    /// Only the last two path segments are used, so an API base path that
    /// itself contains `/repos/` does not leak into the result.
    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        let url = self.repository_url.as_deref()?.trim_end_matches('/');
        let (rest, name) = url.rsplit_once('/')?;
        let (prefix, owner) = rest.rsplit_once('/')?;
        if !prefix.ends_with("/repos") || owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(&url[prefix.len() + 1..])
    }
}

/// State of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Issue is open.
    Open,
    /// Issue is closed.
    Closed,
}

/// A GitHub user (abbreviated form embedded in other objects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: u64,

    /// Login name.
    pub login: String,

    /// Profile URL.
    #[serde(default)]
    pub html_url: Option<String>,
}

/// An issue label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label ID.
    pub id: u64,

    /// Label name.
    pub name: String,

    /// Hex color without `#`.
    #[serde(default)]
    pub color: Option<String>,

    /// Label description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A repository milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone ID.
    pub id: u64,

    /// Milestone number.
    pub number: u64,

    /// Milestone title.
    pub title: String,

    /// Milestone state.
    pub state: IssueState,
}

/// Links present on issues that are pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestLinks {
    /// API URL of the pull request.
    #[serde(default)]
    pub url: Option<String>,

    /// Browser URL of the pull request.
    #[serde(default)]
    pub html_url: Option<String>,

    /// When the pull request was merged.
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}
