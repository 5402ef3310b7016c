//! Per-call request options.

use std::{fmt, time::Duration};

/// Overrides applied to a single API call.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use mercadopago::client::RequestOptions;
///
/// let options = RequestOptions::default()
///     .with_header("X-Sandbox", "true")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(options.custom_headers.len(), 1);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Access token used instead of the configured one.
    pub access_token: Option<String>,
    /// Extra headers. They replace SDK defaults with the same name.
    pub custom_headers: Vec<(String, String)>,
    /// Timeout for this call only.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Uses `access_token` for this call.
    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Adds a custom header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the timeout for this call.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("custom_headers", &self.custom_headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}
