//! Response envelope.

use std::ops::Deref;

use crate::transport::MpResponse;

/// Transport metadata of an API answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportInfo {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
}

impl TransportInfo {
    /// Looks up a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl From<MpResponse> for TransportInfo {
    fn from(response: MpResponse) -> Self {
        Self { status_code: response.status_code, headers: response.headers }
    }
}

/// Deserialized resource together with the transport metadata it arrived with.
///
/// Derefs to the resource, so fields read as if the envelope were not there.
///
/// # Examples
///
/// ```
/// use mercadopago::client::{ApiResponse, TransportInfo};
/// use mercadopago::resources::Payment;
///
/// let response = ApiResponse {
///     resource: Payment { id: Some(42), ..Payment::default() },
///     transport: TransportInfo { status_code: 200, headers: vec![] },
/// };
///
/// assert_eq!(response.id, Some(42));
/// assert_eq!(response.status_code(), 200);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse<T> {
    /// The resource.
    pub resource: T,
    /// Status code and headers.
    pub transport: TransportInfo,
}

impl<T> ApiResponse<T> {
    /// Wraps a resource with the metadata of the response it came from. The body is
    /// dropped.
    #[must_use]
    pub fn new(resource: T, response: MpResponse) -> Self {
        Self { resource, transport: TransportInfo::from(response) }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.transport.status_code
    }

    /// Unwraps the resource.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.resource
    }

    /// Maps the resource, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse { resource: f(self.resource), transport: self.transport }
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
