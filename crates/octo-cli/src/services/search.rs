//! Issue search service.
//!
//! Runs a search through any [`SearchApi`] and shapes the result for
//! display, separated from CLI presentation concerns.

use anyhow::{Context, Result};
use octo_github::{Issue, IssueSearch, SearchApi, SearchResults};
use serde::Serialize;

/// Outcome of one issue search.
#[derive(Debug, Clone, Serialize)]
pub struct IssueSearchReport {
    /// The `q` value that was sent.
    pub query: String,
    /// The decoded result envelope.
    #[serde(flatten)]
    pub results: SearchResults<Issue>,
}

impl IssueSearchReport {
    /// One-line summary, e.g. `2 of 120 results`.
    #[must_use]
    pub fn summary(&self) -> String {
        let noun = if self.results.total_count == 1 {
            "result"
        } else {
            "results"
        };
        if self.results.has_more() {
            format!(
                "{} of {} {noun}",
                self.results.len(),
                self.results.total_count
            )
        } else {
            format!("{} {noun}", self.results.total_count)
        }
    }
}

/// Service for running issue searches.
pub struct SearchService<'a, G: SearchApi> {
    api: &'a G,
}

impl<'a, G: SearchApi> SearchService<'a, G> {
    /// Create a new search service.
    pub const fn new(api: &'a G) -> Self {
        Self { api }
    }

    /// Run the search and collect the report.
    pub async fn search_issues(&self, search: &IssueSearch) -> Result<IssueSearchReport> {
        let query = search.query();
        let results = self
            .api
            .search_issues(search)
            .await
            .with_context(|| format!("Issue search failed for query `{query}`"))?;

        Ok(IssueSearchReport { query, results })
    }
}
