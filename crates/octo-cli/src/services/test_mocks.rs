//! Mock implementations for testing services.
//!
//! These mocks implement the traits from octo-github to enable unit
//! testing of service logic without network access.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use octo_github::{Error, Issue, IssueSearch, Result, SearchApi, SearchResults};

const CREATED_AT: &str = "2024-01-01T00:00:00Z";

/// Mock implementation of `SearchApi` for testing.
pub struct MockSearchApi {
    response: Mutex<Option<Result<SearchResults<Issue>>>>,
    calls: Mutex<Vec<IssueSearch>>,
}

impl MockSearchApi {
    /// Mock that answers the next search with the given page.
    pub fn returning(total_count: u64, incomplete_results: bool, items: Vec<Issue>) -> Self {
        Self {
            response: Mutex::new(Some(Ok(SearchResults {
                total_count,
                incomplete_results,
                items,
            }))),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails the next search with `error`.
    pub fn failing(error: Error) -> Self {
        Self {
            response: Mutex::new(Some(Err(error))),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Searches received so far.
    pub fn calls(&self) -> Vec<IssueSearch> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchApi for MockSearchApi {
    async fn search_issues(&self, search: &IssueSearch) -> Result<SearchResults<Issue>> {
        self.calls.lock().unwrap().push(search.clone());
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(Error::Config("MockSearchApi already answered".into())))
    }
}

/// Build an open issue for tests.
pub fn issue(number: u64, title: &str) -> Issue {
    serde_json::from_value(serde_json::json!({
        "id": number,
        "number": number,
        "title": title,
        "state": "open",
        "url": format!("https://api.github.com/repos/o/r/issues/{number}"),
        "html_url": format!("https://github.com/o/r/issues/{number}"),
        "repository_url": "https://api.github.com/repos/o/r",
        "user": { "id": 1, "login": "octocat" },
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT
    }))
    .unwrap()
}
