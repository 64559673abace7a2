//! Trait abstractions for GitHub API operations.
//!
//! This module defines the `SearchApi` trait which abstracts the search
//! endpoints, enabling dependency injection and testability.

use crate::{Issue, IssueSearch, Result, SearchResults};

/// Trait for GitHub search operations.
///
/// This trait abstracts GitHub API calls, allowing for:
/// - Dependency injection in commands
/// - Mock implementations for testing
pub trait SearchApi: Send + Sync {
    /// Search issues and pull requests, returning the first page of results.
    fn search_issues(
        &self,
        search: &IssueSearch,
    ) -> impl std::future::Future<Output = Result<SearchResults<Issue>>> + Send;
}
