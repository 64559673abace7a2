//! HTTP transport abstraction.
//!
//! Routers build an [`HttpRequest`]; a [`Session`] performs it and hands back
//! the raw status and body. The default [`HttpSession`] is backed by reqwest;
//! tests substitute their own implementations.

use std::future::Future;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::Configuration;
use crate::error::{Error, Result};

/// A transport-level request: method and fully built URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,

    /// Absolute URL, query string included.
    pub url: Url,
}

/// A transport-level response: status code and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes HTTP requests.
///
/// Implementations return `Err` only when no response was obtained; any
/// status code, including errors, comes back as an [`HttpResponse`].
pub trait Session: Send + Sync {
    /// Perform a request and read the whole body.
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// reqwest-backed [`Session`] carrying the configured headers.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpSession {
    client: Client,
}

impl HttpSession {
    /// Build a session with the headers GitHub expects.
    ///
    /// # Errors
    /// Returns error if the header values are invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &Configuration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header_value(config.api_version())?,
        );
        if let Some(token) = config.token() {
            let mut auth = header_value(&format!("Bearer {}", token.expose_secret()))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { client })
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::Config(format!("invalid header: {e}")))
}

impl Session for HttpSession {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "GitHub request");

        let response = self
            .client
            .request(request.method, request.url)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
