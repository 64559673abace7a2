//! GitHub API client.

use std::sync::Arc;

use tokio::task::AbortHandle;
use tracing::debug;

use crate::auth::Auth;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::router::{self, Router, SearchRouter};
use crate::search::{IssueSearch, SearchResults};
use crate::session::{HttpSession, Session};
use crate::traits::SearchApi;
use crate::types::Issue;

/// GitHub API client.
///
/// Generic over the [`Session`] that performs requests; by default every
/// client owns one reqwest-backed [`HttpSession`]. Cloning is cheap: the
/// configuration and session are shared.
pub struct GitHubClient<S = HttpSession> {
    config: Arc<Configuration>,
    session: Arc<S>,
}

impl<S> Clone for GitHubClient<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            session: Arc::clone(&self.session),
        }
    }
}

impl GitHubClient {
    /// Create a new GitHub client for github.com.
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn new(auth: &Auth) -> Result<Self> {
        Self::with_config(Configuration::new(auth)?)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn with_base_url(auth: &Auth, base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(Configuration::new(auth)?.with_api_url(base_url))
    }

    /// Create a client from a prepared configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_config(config: Configuration) -> Result<Self> {
        let session = HttpSession::new(&config)?;
        Ok(Self::with_session(config, session))
    }
}

impl<S: Session> GitHubClient<S> {
    /// Create a client that sends requests through `session`.
    pub fn with_session(config: Configuration, session: S) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(session),
        }
    }

    /// The configuration requests are built from.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    // === Search Operations ===

    /// Search issues and pull requests.
    ///
    /// Issues exactly one request and returns the first page of results.
    ///
    /// # Errors
    /// Returns the transport error, [`Error::ApiError`] for a non-2xx
    /// status, or [`Error::Parse`] if the body does not decode.
    pub async fn search_issues(&self, search: &IssueSearch) -> Result<SearchResults<Issue>> {
        let request = SearchRouter::SearchIssues {
            config: &self.config,
            search,
        }
        .request()?;

        debug!(query = %search.query(), "searching issues");
        let results: SearchResults<Issue> = router::load(self.session.as_ref(), request).await?;
        debug!(
            total = results.total_count,
            items = results.len(),
            incomplete = results.incomplete_results,
            "issue search finished"
        );

        Ok(results)
    }

    /// Start an issue search in the background.
    ///
    /// The request runs on the current tokio runtime and `completion` is
    /// called once with its outcome. The returned handle cancels the
    /// request; a cancelled request never reports a result.
    ///
    /// When the request cannot be started (bad API URL, no runtime),
    /// `completion` receives the error before this returns and the result
    /// is `None`.
    pub fn spawn_search_issues<F>(&self, search: IssueSearch, completion: F) -> Option<RequestHandle>
    where
        S: 'static,
        F: FnOnce(Result<SearchResults<Issue>>) + Send + 'static,
    {
        let request = match (SearchRouter::SearchIssues {
            config: &self.config,
            search: &search,
        })
        .request()
        {
            Ok(request) => request,
            Err(e) => {
                completion(Err(e));
                return None;
            }
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            completion(Err(Error::NoRuntime));
            return None;
        };

        debug!(query = %search.query(), "spawning issue search");
        let session = Arc::clone(&self.session);
        let task = runtime.spawn(async move {
            let result = router::load(session.as_ref(), request).await;
            completion(result);
        });

        Some(RequestHandle {
            abort: task.abort_handle(),
        })
    }
}

/// Handle to a request started with [`GitHubClient::spawn_search_issues`].
///
/// Dropping the handle does not cancel the request.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    abort: AbortHandle,
}

impl RequestHandle {
    /// Cancel the request. No-op if it already finished.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Whether the request has completed or was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

// === Trait Implementation ===

impl<S: Session> SearchApi for GitHubClient<S> {
    async fn search_issues(&self, search: &IssueSearch) -> Result<SearchResults<Issue>> {
        self.search_issues(search).await
    }
}
