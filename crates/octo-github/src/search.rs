//! Search API types: the result envelope and issue search filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One page of search results.
///
/// `total_count` is what the server reports across all pages and may exceed
/// `items.len()`. When `incomplete_results` is set the search timed out on
/// the server and `items` may be a strict subset of the real matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Total number of matches.
    pub total_count: u64,

    /// Whether the server gave up before considering every candidate.
    pub incomplete_results: bool,

    /// Matches on this page, in server order.
    pub items: Vec<T>,
}

impl<T> SearchResults<T> {
    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the server reports more matches than this page holds.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.total_count > self.items.len() as u64
    }
}

impl<T> IntoIterator for SearchResults<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SearchResults<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Open/closed qualifier used as `is:<openness>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Openness {
    /// Open issues and pull requests.
    #[default]
    Open,
    /// Closed issues and pull requests.
    Closed,
}

impl Openness {
    /// Qualifier value as sent to the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for Openness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Openness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(format!("unknown state '{other}' (expected open or closed)")),
        }
    }
}

/// Default value of the `type:` qualifier.
pub const DEFAULT_ISSUE_TYPE: &str = "issue";

/// Filters for an issue search.
///
/// Every filter is optional. `repo`, `involves` and `author` start unset,
/// `type` starts as `issue`, the state starts as open and `archived` starts
/// as `false`.
///
/// ```
/// use octo_github::IssueSearch;
///
/// let search = IssueSearch::new()
///     .repo("octokit/octokit.swift")
///     .involves("nerdishbynature");
/// assert_eq!(
///     search.query(),
///     "repo:octokit/octokit.swift+type:issue+is:open+involves:nerdishbynature+archived:false"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSearch {
    repo: Option<String>,
    kind: Option<String>,
    openness: Openness,
    involves: Option<String>,
    author: Option<String>,
    archived: bool,
}

impl Default for IssueSearch {
    fn default() -> Self {
        Self {
            repo: None,
            kind: Some(DEFAULT_ISSUE_TYPE.to_string()),
            openness: Openness::Open,
            involves: None,
            author: None,
            archived: false,
        }
    }
}

impl IssueSearch {
    /// Filters with every default applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a repository (`owner/name`).
    #[must_use]
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Set the `type:` qualifier (`issue` or `pr`).
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Drop the `type:` qualifier, matching issues and pull requests.
    #[must_use]
    pub fn without_type(mut self) -> Self {
        self.kind = None;
        self
    }

    /// Set the open/closed qualifier.
    #[must_use]
    pub fn openness(mut self, openness: Openness) -> Self {
        self.openness = openness;
        self
    }

    /// Restrict to items involving a user.
    #[must_use]
    pub fn involves(mut self, user: impl Into<String>) -> Self {
        self.involves = Some(user.into());
        self
    }

    /// Restrict to items authored by a user.
    #[must_use]
    pub fn author(mut self, user: impl Into<String>) -> Self {
        self.author = Some(user.into());
        self
    }

    /// Set the `archived:` qualifier.
    #[must_use]
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Qualifiers in the order they are sent. Unset filters carry `None`.
    #[must_use]
    pub fn qualifiers(&self) -> [(&'static str, Option<String>); 6] {
        [
            ("repo", self.repo.clone()),
            ("type", self.kind.clone()),
            ("is", Some(self.openness.to_string())),
            ("involves", self.involves.clone()),
            ("author", self.author.clone()),
            ("archived", Some(self.archived.to_string())),
        ]
    }

    /// The `q` parameter value: set qualifiers as `key:value`, joined by `+`.
    #[must_use]
    pub fn query(&self) -> String {
        self.qualifiers()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{key}:{v}")))
            .collect::<Vec<_>>()
            .join("+")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_repo_and_involves() {
        let search = IssueSearch::new()
            .repo("octokit/octokit.swift")
            .involves("nerdishbynature");
        assert_eq!(
            search.query(),
            "repo:octokit/octokit.swift+type:issue+is:open+involves:nerdishbynature+archived:false"
        );
    }

    #[test]
    fn test_query_defaults_only() {
        assert_eq!(
            IssueSearch::new().query(),
            "type:issue+is:open+archived:false"
        );
    }

    #[test]
    fn test_query_all_optional_absent() {
        assert_eq!(
            IssueSearch::new().without_type().query(),
            "is:open+archived:false"
        );
    }

    #[test]
    fn test_query_all_set() {
        let search = IssueSearch::new()
            .repo("a/b")
            .kind("pr")
            .openness(Openness::Closed)
            .involves("alice")
            .author("bob")
            .archived(true);
        assert_eq!(
            search.query(),
            "repo:a/b+type:pr+is:closed+involves:alice+author:bob+archived:true"
        );
    }

    #[test]
    fn test_query_order_holds_for_every_combination() {
        let keys = ["repo", "type", "involves", "author"];

        for mask in 0u8..16 {
            let mut search = IssueSearch::new().without_type();
            let mut expected = Vec::new();
            if mask & 1 != 0 {
                search = search.repo("o/r");
                expected.push("repo:o/r");
            }
            if mask & 2 != 0 {
                search = search.kind("issue");
                expected.push("type:issue");
            }
            expected.push("is:open");
            if mask & 4 != 0 {
                search = search.involves("u");
                expected.push("involves:u");
            }
            if mask & 8 != 0 {
                search = search.author("a");
                expected.push("author:a");
            }
            expected.push("archived:false");

            let query = search.query();
            assert_eq!(query, expected.join("+"), "mask {mask:04b}");
            for (bit, key) in keys.iter().enumerate() {
                let present = query.split('+').any(|q| q.starts_with(&format!("{key}:")));
                assert_eq!(present, mask & (1 << bit) != 0, "{key} in {query}");
            }
        }
    }

    #[test]
    fn test_openness_parse_and_display() {
        assert_eq!("open".parse::<Openness>().unwrap(), Openness::Open);
        assert_eq!("CLOSED".parse::<Openness>().unwrap(), Openness::Closed);
        assert!("merged".parse::<Openness>().is_err());
        assert_eq!(Openness::Closed.to_string(), "closed");
        assert_eq!(Openness::default(), Openness::Open);
    }

    #[test]
    fn test_envelope_decodes_field_names() {
        let results: SearchResults<u32> = serde_json::from_str(
            r#"{"total_count": 2, "incomplete_results": false, "items": [1, 2]}"#,
        )
        .unwrap();

        assert_eq!(results.total_count, 2);
        assert!(!results.incomplete_results);
        assert_eq!(results.len(), 2);
        assert!(!results.has_more());
    }

    #[test]
    fn test_envelope_total_may_exceed_items() {
        let results = SearchResults {
            total_count: 120,
            incomplete_results: true,
            items: vec!["a", "b"],
        };
        assert!(results.has_more());
        assert_eq!(results.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_envelope_missing_field_is_error() {
        let result: Result<SearchResults<u32>, _> =
            serde_json::from_str(r#"{"total_count": 2, "items": []}"#);
        assert!(result.is_err());
    }
}
