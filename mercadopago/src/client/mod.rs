//! API clients.
//!
//! [`MercadoPagoClient`] owns the configuration and the transport and performs the
//! steps every call shares: URI resolution, default headers, idempotency keys,
//! per-call options, status handling and deserialization. The per-resource clients
//! ([`PointClient`], [`OrderClient`], [`PaymentClient`], [`MerchantOrderClient`])
//! only build requests and pick the target resource type.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mercadopago::{client::MercadoPagoClient, config::MercadoPagoConfig};
//!
//! # async fn example() -> mercadopago::error::Result<()> {
//! let client = MercadoPagoClient::new(MercadoPagoConfig::from_env()?)?;
//!
//! let payment = client.payments().get(123_456_789).await?;
//! println!("{:?} {:?}", payment.status, payment.transport.status_code);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{
    config::MercadoPagoConfig,
    error::{MpError, Result},
    serialization::{deserialize_from_slice, deserialize_or_default},
    transport::{HttpClient, HttpTransport, MpRequest, MpResponse},
};

pub mod merchant_order;
pub mod options;
pub mod order;
pub mod payment;
pub mod point;
pub mod response;
pub mod search;

pub use merchant_order::MerchantOrderClient;
pub use options::RequestOptions;
pub use order::OrderClient;
pub use payment::PaymentClient;
pub use point::PointClient;
pub use response::{ApiResponse, TransportInfo};
pub use search::{ElementsResourcesPage, Paging, ResultsResourcesPage, SearchRequest};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("MercadoPago Rust SDK/", env!("CARGO_PKG_VERSION"));

/// Header carrying the idempotency key of write requests.
pub const IDEMPOTENCY_KEY_HEADER: &str = "X-Idempotency-Key";

const DEFAULT_API_ERROR_MESSAGE: &str = "Api error. Check response for details";

/// Shared SDK core.
///
/// Cloning is cheap: configuration and transport sit behind [`Arc`].
pub struct MercadoPagoClient<H = HttpTransport> {
    config: Arc<MercadoPagoConfig>,
    http: Arc<H>,
}

impl<H> Clone for MercadoPagoClient<H> {
    fn clone(&self) -> Self {
        Self { config: Arc::clone(&self.config), http: Arc::clone(&self.http) }
    }
}

impl<H> std::fmt::Debug for MercadoPagoClient<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MercadoPagoClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl MercadoPagoClient<HttpTransport> {
    /// Creates a client backed by [`HttpTransport`] built from `config.http`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the transport cannot be built.
    pub fn new(config: MercadoPagoConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_config(&config.http)?;
        Ok(Self::with_http_client(config, transport))
    }
}

impl<H: HttpClient> MercadoPagoClient<H> {
    /// Creates a client that sends through `http`.
    ///
    /// The configuration is used as given; call [`MercadoPagoConfig::validate`]
    /// first if it comes from an untrusted source.
    #[must_use]
    pub fn with_http_client(config: MercadoPagoConfig, http: H) -> Self {
        Self { config: Arc::new(config), http: Arc::new(http) }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MercadoPagoConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub fn http_client(&self) -> &H {
        &self.http
    }

    /// Point terminal operations.
    #[must_use]
    pub fn point(&self) -> PointClient<H> {
        PointClient::new(self.clone())
    }

    /// `/v1/orders` operations.
    #[must_use]
    pub fn orders(&self) -> OrderClient<H> {
        OrderClient::new(self.clone())
    }

    /// `/v1/payments` operations.
    #[must_use]
    pub fn payments(&self) -> PaymentClient<H> {
        PaymentClient::new(self.clone())
    }

    /// `/merchant_orders` operations.
    #[must_use]
    pub fn merchant_orders(&self) -> MerchantOrderClient<H> {
        MerchantOrderClient::new(self.clone())
    }

    /// Builds the request that goes on the wire.
    ///
    /// Applies, in order: base URL resolution, SDK default headers, headers already
    /// on the request, custom headers from `options`, the idempotency key of write
    /// methods, and the per-call timeout. Later steps win over earlier ones on
    /// header name clashes.
    ///
    /// # Errors
    ///
    /// Returns [`MpError::Config`] if no access token is available.
    pub fn prepare_request(
        &self,
        request: MpRequest,
        options: &RequestOptions,
    ) -> Result<MpRequest> {
        let token = options
            .access_token
            .as_deref()
            .unwrap_or(&self.config.access_token);
        if token.trim().is_empty() {
            return Err(MpError::Config("access token is not configured".to_owned()));
        }

        let MpRequest { method, uri, headers: request_headers, query_params, payload, timeout } =
            request;

        let mut headers = vec![
            ("Accept".to_owned(), "application/json".to_owned()),
            ("User-Agent".to_owned(), USER_AGENT.to_owned()),
            ("Authorization".to_owned(), format!("Bearer {token}")),
        ];
        for (name, value) in [
            ("X-Corporation-Id", &self.config.corporation_id),
            ("X-Integrator-Id", &self.config.integrator_id),
            ("X-Platform-Id", &self.config.platform_id),
        ] {
            if let Some(value) = value {
                headers.push((name.to_owned(), value.clone()));
            }
        }

        let overrides = request_headers.into_iter().chain(options.custom_headers.iter().cloned());
        for (name, value) in overrides {
            set_header(&mut headers, name, value);
        }

        if method.is_write()
            && !headers.iter().any(|(name, _)| name.eq_ignore_ascii_case(IDEMPOTENCY_KEY_HEADER))
        {
            headers.push((IDEMPOTENCY_KEY_HEADER.to_owned(), Uuid::new_v4().to_string()));
        }

        Ok(MpRequest {
            method,
            uri: self.resolve_uri(&uri),
            headers,
            query_params,
            payload,
            timeout: options.timeout.or(timeout),
        })
    }

    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`MpError::Api`] for status codes above 299, and propagates
    /// [`Self::prepare_request`] and transport errors.
    #[instrument(skip(self, request, options), fields(method = %request.method, uri = %request.uri))]
    pub async fn send(&self, request: MpRequest, options: &RequestOptions) -> Result<MpResponse> {
        let request = self.prepare_request(request, options)?;
        let response = self.http.send(&request).await?;

        if response.status_code > 299 {
            let error = api_error(&response);
            warn!(status = response.status_code, "API returned an error");
            return Err(error);
        }

        Ok(response)
    }

    /// Sends a request and deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::send`], plus [`MpError::Serialization`] if the body does not
    /// match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: MpRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>> {
        let response = self.send(request, options).await?;
        let resource = deserialize_from_slice(&response.body)?;
        Ok(ApiResponse::new(resource, response))
    }

    /// Like [`Self::execute`], but an empty body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub async fn execute_allow_empty<T: DeserializeOwned + Default>(
        &self,
        request: MpRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>> {
        let response = self.send(request, options).await?;
        let resource = deserialize_or_default(&response.body)?;
        Ok(ApiResponse::new(resource, response))
    }

    fn resolve_uri(&self, uri: &str) -> String {
        if uri.starts_with("https://") || uri.starts_with("http://") {
            return uri.to_owned();
        }
        let base = self.config.base_url.trim_end_matches('/');
        if uri.starts_with('/') { format!("{base}{uri}") } else { format!("{base}/{uri}") }
    }
}

/// Replaces a header case-insensitively, or appends it.
fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(&name)) {
        Some(existing) => *existing = (name, value),
        None => headers.push((name, value)),
    }
}

fn api_error(response: &MpResponse) -> MpError {
    let body = response.body_text();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_owned());
    MpError::Api { status: response.status_code, message, body }
}

/// Rejects path identifiers that would turn into a different endpoint: empty ones,
/// ones with reserved characters and dot segments.
pub(crate) fn require_id(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MpError::InvalidInput(format!("{name} cannot be empty")));
    }
    if value.contains(['/', '?', '#']) {
        return Err(MpError::InvalidInput(format!("{name} contains reserved characters")));
    }
    if value == "." || value.contains("..") {
        return Err(MpError::InvalidInput(format!("{name} contains a dot segment")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::transport::HttpMethod;

    struct Unreachable;

    impl HttpClient for Unreachable {
        async fn send<'a>(&'a self, _request: &'a MpRequest) -> Result<MpResponse> {
            Err(MpError::TransportError("no network in unit tests".to_owned()))
        }
    }

    fn client(config: MercadoPagoConfig) -> MercadoPagoClient<Unreachable> {
        MercadoPagoClient::with_http_client(config, Unreachable)
    }

    #[test]
    fn test_prepare_adds_default_headers() {
        let config = MercadoPagoConfig {
            corporation_id: Some("corp-1".to_owned()),
            platform_id: Some("plat-1".to_owned()),
            ..MercadoPagoConfig::new("APP_USR-1")
        };
        let request = MpRequest::new(HttpMethod::Get, "/v1/payments/1");
        let prepared = client(config).prepare_request(request, &RequestOptions::default()).unwrap();

        assert_eq!(prepared.uri, "https://api.mercadopago.com/v1/payments/1");
        assert_eq!(prepared.header("accept"), Some("application/json"));
        assert_eq!(prepared.header("authorization"), Some("Bearer APP_USR-1"));
        assert!(prepared.header("user-agent").unwrap().starts_with("MercadoPago Rust SDK/"));
        assert_eq!(prepared.header("X-Corporation-Id"), Some("corp-1"));
        assert_eq!(prepared.header("X-Platform-Id"), Some("plat-1"));
        assert!(!prepared.has_header("X-Integrator-Id"));
        assert!(!prepared.has_header(IDEMPOTENCY_KEY_HEADER));
    }

    #[test]
    fn test_prepare_write_gets_fresh_idempotency_key() {
        let client = client(MercadoPagoConfig::new("APP_USR-1"));
        let request = MpRequest::new(HttpMethod::Post, "/v1/orders");
        let first = client.prepare_request(request.clone(), &RequestOptions::default()).unwrap();
        let second = client.prepare_request(request, &RequestOptions::default()).unwrap();

        let first_key = first.header(IDEMPOTENCY_KEY_HEADER).unwrap();
        assert!(Uuid::parse_str(first_key).is_ok());
        assert_ne!(Some(first_key), second.header(IDEMPOTENCY_KEY_HEADER));
    }

    #[test]
    fn test_prepare_keeps_caller_idempotency_key() {
        let options = RequestOptions::default().with_header("x-idempotency-key", "caller-key");
        let prepared = client(MercadoPagoConfig::new("APP_USR-1"))
            .prepare_request(MpRequest::new(HttpMethod::Put, "/v1/payments/1"), &options)
            .unwrap();

        let keys: Vec<_> = prepared
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(IDEMPOTENCY_KEY_HEADER))
            .collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].1, "caller-key");
    }

    #[test]
    fn test_prepare_options_override_token_headers_and_timeout() {
        let options = RequestOptions::default()
            .with_access_token("TEST-override")
            .with_header("Accept", "text/plain")
            .with_timeout(Duration::from_secs(3));
        let request =
            MpRequest::new(HttpMethod::Get, "/v1/payments/1").with_timeout(Duration::from_secs(9));

        let prepared =
            client(MercadoPagoConfig::new("APP_USR-1")).prepare_request(request, &options).unwrap();
        assert_eq!(prepared.header("Authorization"), Some("Bearer TEST-override"));
        assert_eq!(prepared.header("accept"), Some("text/plain"));
        let accept_headers =
            prepared.headers.iter().filter(|(name, _)| name.eq_ignore_ascii_case("accept"));
        assert_eq!(accept_headers.count(), 1);
        assert_eq!(prepared.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_prepare_requires_token() {
        let request = MpRequest::new(HttpMethod::Get, "/v1/payments/1");
        let result = client(MercadoPagoConfig::default())
            .prepare_request(request.clone(), &RequestOptions::default());
        assert!(matches!(result, Err(MpError::Config(_))));

        let options = RequestOptions::default().with_access_token("TEST-per-call");
        let result = client(MercadoPagoConfig::default()).prepare_request(request, &options);
        assert!(result.is_ok());
    }

    #[test]
    fn test_resolve_uri() {
        let config = MercadoPagoConfig {
            base_url: "https://sandbox.example.com/".to_owned(),
            ..MercadoPagoConfig::new("t")
        };
        let client = client(config);
        assert_eq!(client.resolve_uri("/v1/orders"), "https://sandbox.example.com/v1/orders");
        assert_eq!(client.resolve_uri("v1/orders"), "https://sandbox.example.com/v1/orders");
        assert_eq!(
            client.resolve_uri("https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    #[allow(clippy::unreachable, reason = "test asserts the error variant")]
    fn test_api_error_uses_body_message() {
        let response = MpResponse {
            status_code: 404,
            headers: vec![],
            body: br#"{"message":"Payment not found","error":"not_found","status":404}"#.to_vec(),
        };
        let MpError::Api { status, message, body } = api_error(&response) else {
            unreachable!("expected Api error");
        };
        assert_eq!(status, 404);
        assert_eq!(message, "Payment not found");
        assert!(body.contains("not_found"));
    }

    #[test]
    fn test_api_error_falls_back_to_default_message() {
        let response = MpResponse { status_code: 502, headers: vec![], body: b"<html>".to_vec() };
        let error = api_error(&response);
        assert_eq!(
            error.to_string(),
            "API error (status 502): Api error. Check response for details"
        );
    }

    #[test]
    fn test_require_id() {
        assert!(require_id("order_id", "ORD01").is_ok());
        assert!(require_id("order_id", "").is_err());
        assert!(require_id("order_id", "  ").is_err());
        assert!(require_id("order_id", "a/b").is_err());
        assert!(require_id("order_id", "a?b=1").is_err());
        assert!(require_id("order_id", "..").is_err());
        assert!(require_id("order_id", ".").is_err());
        assert!(require_id("order_id", "ORD..01").is_err());
        assert!(require_id("order_id", "ORD.01").is_ok());
    }

    #[tokio::test]
    async fn test_send_propagates_transport_error() {
        let result = client(MercadoPagoConfig::new("APP_USR-1"))
            .send(MpRequest::new(HttpMethod::Get, "/v1/payments/1"), &RequestOptions::default())
            .await;
        assert!(matches!(result, Err(MpError::TransportError(_))));
    }
}
