//! HTTP transport collaborator.
//!
//! Clients never talk to the network directly. They build an [`MpRequest`] and hand it
//! to an [`HttpClient`], which returns the raw [`MpResponse`] whatever its status code.
//! Turning error statuses into [`crate::error::MpError::Api`] and bodies into resources
//! is the client's job.
//!
//! [`HttpTransport`] is the default reqwest-backed implementation. Callers can plug in
//! their own, for instance to route through a proxy layer or to record traffic in tests.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mercadopago::transport::{HttpClient, HttpMethod, HttpTransport, MpRequest};
//!
//! # async fn example() -> mercadopago::error::Result<()> {
//! let transport = HttpTransport::new()?;
//! let request = MpRequest::new(HttpMethod::Get, "https://api.mercadopago.com/v1/payments/1")
//!     .with_header("Authorization", "Bearer APP_USR-token");
//!
//! let response = transport.send(&request).await?;
//! println!("Status: {}", response.status_code);
//! # Ok(())
//! # }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;
use std::{fmt, time::Duration};

use crate::{error::Result, serialization::JsonObject};

pub mod config;
pub mod http;

pub use config::{HttpConfig, HttpVersion};
pub use http::HttpTransport;

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns true for methods that change server state and carry an idempotency key.
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request handed to an [`HttpClient`].
///
/// Clients build requests with a path-only `uri`; the SDK core resolves it against
/// the configured base URL before sending.
#[derive(Debug, Clone, PartialEq)]
pub struct MpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, or a path relative to the API base URL.
    pub uri: String,
    /// Request headers, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Query parameters, in insertion order.
    pub query_params: Vec<(String, String)>,
    /// JSON body.
    pub payload: Option<JsonObject>,
    /// Per-request timeout overriding the transport default.
    pub timeout: Option<Duration>,
}

impl MpRequest {
    /// Creates a request without headers, query or body.
    #[must_use]
    pub fn new(method: HttpMethod, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            headers: Vec::new(),
            query_params: Vec::new(),
            payload: None,
            timeout: None,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends query parameters.
    #[must_use]
    pub fn with_query_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query_params.extend(params);
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_payload(mut self, payload: JsonObject) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Looks up a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Returns true if the header is present, ignoring case.
    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}

/// Raw response returned by an [`HttpClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl MpResponse {
    /// Looks up a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Returns true for status codes up to 299.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code <= 299
    }

    /// Body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Sends HTTP requests on behalf of the SDK.
///
/// Implementations return the response for every status code; only failures to get
/// a response at all (invalid request, I/O, timeout) are errors.
///
/// # Examples
///
/// ```
/// use mercadopago::error::Result;
/// use mercadopago::transport::{HttpClient, MpRequest, MpResponse};
///
/// struct NoContent;
///
/// impl HttpClient for NoContent {
///     async fn send<'a>(&'a self, _request: &'a MpRequest) -> Result<MpResponse> {
///         Ok(MpResponse { status_code: 204, ..MpResponse::default() })
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns error if the request is rejected before sending or if no response
    /// arrives.
    fn send<'a>(
        &'a self,
        request: &'a MpRequest,
    ) -> impl Future<Output = Result<MpResponse>> + Send + 'a;
}
