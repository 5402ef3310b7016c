//! HTTP transport implementation.
//!
//! This module provides HTTP/1.1 and HTTP/2 transport using reqwest.

use reqwest::{Client, Method, header::CONTENT_TYPE};
use tracing::{debug, instrument};
use url::Url;

use super::config::{HttpConfig, HttpVersion};
use crate::{
    error::{MpError, Result},
    serialization::serialize_to_vec,
    transport::{HttpClient, HttpMethod, MpRequest, MpResponse},
};

/// Validates URL for security constraints.
///
/// Ensures the URL uses HTTPS and names a host.
fn validate_url(url: &Url) -> Result<()> {
    if url.scheme() != "https" {
        return Err(MpError::TransportError("Only HTTPS URLs are allowed".to_owned()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(MpError::TransportError("URL has no host".to_owned()));
    }
    Ok(())
}

/// Rejects traversal sequences in the raw URI.
///
/// `Url::parse` normalizes `..` segments away, so the check runs before parsing. An
/// identifier like `../payments` must never reach a different endpoint.
fn validate_path(uri: &str) -> Result<()> {
    let rest = uri.split_once("://").map_or(uri, |(_, rest)| rest);
    if rest.contains("..") || rest.contains("//") {
        return Err(MpError::TransportError(
            "Invalid path: traversal sequences not allowed".to_owned(),
        ));
    }
    Ok(())
}

/// Validates header name and value for CRLF injection prevention.
fn validate_header(name: &str, value: &str) -> Result<()> {
    if name.contains(['\r', '\n', '\0']) {
        return Err(MpError::TransportError(
            "Invalid header name: control characters not allowed".to_owned(),
        ));
    }
    if value.contains(['\r', '\n', '\0']) {
        return Err(MpError::TransportError(
            "Invalid header value: control characters not allowed".to_owned(),
        ));
    }
    Ok(())
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// HTTP/1.1 and HTTP/2 transport using reqwest.
///
/// Supports automatic connection pooling, keep-alive, and HTTP/2 multiplexing.
/// Cloning is cheap and shares the connection pool.
///
/// # Examples
///
/// ```
/// use mercadopago::transport::{HttpConfig, HttpTransport, HttpVersion};
///
/// let config = HttpConfig {
///     pool_max_idle_per_host: 20,
///     timeout_secs: 60,
///     connect_timeout_secs: 15,
///     http_version: HttpVersion::Http1,
/// };
///
/// let transport = HttpTransport::with_config(&config).unwrap();
/// assert_eq!(transport.protocol_name(), "http/1.1");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    http_version: HttpVersion,
}

impl HttpTransport {
    /// Creates a transport with [`HttpConfig::default`].
    ///
    /// Default configuration:
    /// - Pool max idle per host: 100
    /// - Timeout: 30 seconds
    /// - Connect timeout: 10 seconds
    /// - HTTP version: Auto
    ///
    /// # Errors
    ///
    /// Returns error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Creates a transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout());

        builder = match config.http_version {
            HttpVersion::Http1 => builder.http1_only(),
            HttpVersion::Http2 => builder.http2_prior_knowledge(),
            HttpVersion::Auto => builder,
        };

        let client = builder.build().map_err(MpError::HttpError)?;

        Ok(Self { client, http_version: config.http_version })
    }

    /// Returns the protocol name for logging.
    #[must_use]
    pub const fn protocol_name(&self) -> &'static str {
        match self.http_version {
            HttpVersion::Http1 => "http/1.1",
            HttpVersion::Http2 => "http/2",
            HttpVersion::Auto => "http",
        }
    }

    #[instrument(
        skip(self, request),
        fields(method = %request.method, uri = %request.uri, protocol = self.protocol_name())
    )]
    async fn execute_request(&self, request: &MpRequest) -> Result<MpResponse> {
        validate_path(&request.uri)?;

        let mut url = Url::parse(&request.uri)
            .map_err(|e| MpError::TransportError(format!("invalid uri '{}': {e}", request.uri)))?;
        validate_url(&url)?;

        if !request.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query_params);
        }

        for (name, value) in &request.headers {
            validate_header(name, value)?;
        }

        let mut builder = self.client.request(reqwest_method(request.method), url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(payload) = &request.payload {
            let body = serialize_to_vec(payload)?;
            if !request.has_header(CONTENT_TYPE.as_str()) {
                builder = builder.header(CONTENT_TYPE, "application/json");
            }
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        let status_code = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_owned()))
            .collect();

        let body = response.bytes().await.map_err(MpError::HttpError)?.to_vec();

        debug!(status_code, body_len = body.len(), "received response");

        Ok(MpResponse { status_code, headers, body })
    }
}

impl HttpClient for HttpTransport {
    async fn send<'a>(&'a self, request: &'a MpRequest) -> Result<MpResponse> {
        self.execute_request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::JsonObject;

    #[test]
    fn test_http_transport_new() {
        let transport = HttpTransport::new();
        assert!(transport.is_ok());
    }

    #[test]
    fn test_http_transport_protocol_name() {
        let config_http1 = HttpConfig { http_version: HttpVersion::Http1, ..Default::default() };
        let transport_http1 = HttpTransport::with_config(&config_http1).unwrap();
        assert_eq!(transport_http1.protocol_name(), "http/1.1");

        let config_http2 = HttpConfig { http_version: HttpVersion::Http2, ..Default::default() };
        let transport_http2 = HttpTransport::with_config(&config_http2).unwrap();
        assert_eq!(transport_http2.protocol_name(), "http/2");

        let transport_auto = HttpTransport::new().unwrap();
        assert_eq!(transport_auto.protocol_name(), "http");
    }

    #[test]
    fn test_http_transport_with_zero_pool_size() {
        let config = HttpConfig { pool_max_idle_per_host: 0, ..Default::default() };
        assert!(HttpTransport::with_config(&config).is_ok());
    }

    #[test]
    fn test_http_transport_debug_format() {
        let transport = HttpTransport::new().unwrap();
        let debug_str = format!("{transport:?}");
        assert!(debug_str.contains("HttpTransport"));
    }

    #[tokio::test]
    async fn test_send_rejects_plain_http() {
        let transport = HttpTransport::new().unwrap();
        let request = MpRequest::new(HttpMethod::Get, "http://api.mercadopago.com/v1/payments/1");

        let result = transport.send(&request).await;
        assert!(matches!(result, Err(MpError::TransportError(_))));
    }

    #[tokio::test]
    async fn test_send_rejects_relative_uri() {
        let transport = HttpTransport::new().unwrap();
        let request = MpRequest::new(HttpMethod::Get, "/v1/payments/1");

        let result = transport.send(&request).await;
        assert!(matches!(result, Err(MpError::TransportError(_))));
    }

    #[tokio::test]
    async fn test_send_rejects_crlf_header() {
        let transport = HttpTransport::new().unwrap();
        let request = MpRequest::new(HttpMethod::Get, "https://api.mercadopago.com/v1/payments/1")
            .with_header("X-Custom", "value\r\nEvil-Header: injected");

        let result = transport.send(&request).await;
        assert!(matches!(result, Err(MpError::TransportError(_))));
    }

    #[tokio::test]
    async fn test_send_rejects_traversal_in_identifier() {
        let transport = HttpTransport::new().unwrap();
        let uri = "https://api.mercadopago.com/v1/orders/../payments";
        let request = MpRequest::new(HttpMethod::Delete, uri).with_payload(JsonObject::new());

        let result = transport.send(&request).await;
        assert!(matches!(result, Err(MpError::TransportError(_))));
    }

    #[test]
    fn test_validate_url_https_required() {
        let https_url = Url::parse("https://api.mercadopago.com").unwrap();
        assert!(validate_url(&https_url).is_ok());

        let http_url = Url::parse("http://api.mercadopago.com").unwrap();
        let result = validate_url(&http_url);
        assert!(matches!(result.unwrap_err(), MpError::TransportError(_)));

        let file_url = Url::parse("file:///etc/passwd").unwrap();
        assert!(validate_url(&file_url).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("https://api.mercadopago.com/v1/orders/ORD1").is_ok());
        assert!(validate_path("https://api.mercadopago.com/v1/orders/../x").is_err());
        assert!(validate_path("https://api.mercadopago.com/v1//orders").is_err());
        assert!(validate_path("/v1/orders/ORD1/transactions/PAY1").is_ok());
    }

    #[test]
    fn test_validate_header_valid() {
        assert!(validate_header("Content-Type", "application/json").is_ok());
        let key = "4b1e6c5e-7c4f-4f55-9d0a-8d6a3d1e2f10";
        assert!(validate_header("X-Idempotency-Key", key).is_ok());
    }

    #[test]
    fn test_validate_header_crlf_injection_blocked() {
        let result = validate_header("X-Evil\r\n", "value");
        assert!(matches!(result.unwrap_err(), MpError::TransportError(_)));

        assert!(validate_header("X-Custom", "value\r\nEvil-Header: injected").is_err());
        assert!(validate_header("X-Evil\0", "value").is_err());
        assert!(validate_header("X-Custom", "value\0").is_err());
    }

    #[test]
    fn test_reqwest_method_mapping() {
        assert_eq!(reqwest_method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(reqwest_method(HttpMethod::Delete), Method::DELETE);
    }
}
