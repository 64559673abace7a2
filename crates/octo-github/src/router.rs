//! Request routing: logical operations to HTTP requests.
//!
//! A [`Router`] names an operation's method, path and parameters. The
//! provided methods turn that into an [`HttpRequest`]; [`load`] sends it
//! through a [`Session`] and decodes the JSON body.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::search::IssueSearch;
use crate::session::{HttpRequest, HttpResponse, Session};

/// Bytes escaped in query item names and values.
///
/// Covers the query delimiters (`&`, `=`, `#`), `%` itself and the
/// characters a URL may not carry raw. `+`, `:` and `/` stay literal so the
/// search qualifier syntax reaches the server as written.
const QUERY_ITEM: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// Maps an operation to the shape of its HTTP request.
///
/// Parameters are appended to the URL query string; routers here never
/// carry a request body.
pub trait Router {
    /// HTTP method.
    fn method(&self) -> Method;

    /// Path relative to the configured API URL, without leading slash.
    fn path(&self) -> String;

    /// Configuration the request is built from.
    fn configuration(&self) -> &Configuration;

    /// Parameters as `(name, value)` pairs, in the order they are sent.
    fn params(&self) -> Vec<(&'static str, String)>;

    /// Query items for a parameter list, one per parameter.
    fn url_query(&self, params: &[(&'static str, String)]) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect()
    }

    /// Build the transport-level request.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUrl`] if the configured API URL and path do
    /// not form a valid URL.
    fn request(&self) -> Result<HttpRequest> {
        let base = self.configuration().api_url();
        let raw = format!("{base}/{}", self.path());
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        let items = self.url_query(&self.params());
        if !items.is_empty() {
            let query = items
                .iter()
                .map(|(name, value)| {
                    format!(
                        "{}={}",
                        utf8_percent_encode(name, QUERY_ITEM),
                        utf8_percent_encode(value, QUERY_ITEM)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        Ok(HttpRequest {
            method: self.method(),
            url,
        })
    }
}

/// Search endpoints.
#[derive(Debug, Clone, Copy)]
pub enum SearchRouter<'a> {
    /// `GET search/issues?q=…`
    SearchIssues {
        /// Client configuration.
        config: &'a Configuration,
        /// Filters rendered into `q`.
        search: &'a IssueSearch,
    },
}

impl Router for SearchRouter<'_> {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        match self {
            Self::SearchIssues { .. } => "search/issues".to_string(),
        }
    }

    fn configuration(&self) -> &Configuration {
        match self {
            Self::SearchIssues { config, .. } => config,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::SearchIssues { search, .. } => vec![("q", search.query())],
        }
    }
}

/// Send a request and decode the JSON body into `T`.
///
/// # Errors
/// Returns the session's error if no response was obtained,
/// [`Error::ApiError`] for a non-2xx status and [`Error::Parse`] if the body
/// does not decode.
pub async fn load<T, S>(session: &S, request: HttpRequest) -> Result<T>
where
    T: DeserializeOwned,
    S: Session + ?Sized,
{
    let response = session.send(request).await?;
    decode(&response)
}

/// Decode a response, treating non-2xx statuses as errors.
///
/// # Errors
/// Returns [`Error::ApiError`] for a non-2xx status and [`Error::Parse`] if
/// the body does not decode.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    if !response.is_success() {
        let message = response.text();
        warn!(status = response.status, "GitHub API error response");
        return Err(Error::ApiError {
            status: response.status,
            message,
        });
    }

    let value = serde_json::from_slice(&response.body)?;
    debug!(bytes = response.body.len(), "decoded GitHub response");
    Ok(value)
}
