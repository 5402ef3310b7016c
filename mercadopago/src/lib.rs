//! MercadoPago SDK: typed Rust client for the MercadoPago REST API
//!
//! Per-resource clients build HTTP requests, send them through a pluggable
//! transport, and turn JSON answers into typed resources.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  PointClient  OrderClient  PaymentClient  MerchantOr.. │  client::*
//! └──────────────────────────┬───────────────────────────┘
//!                            │ MpRequest (path, query, JsonObject)
//! ┌──────────────────────────▼───────────────────────────┐
//! │ MercadoPagoClient: base URL, auth, idempotency keys,  │  client
//! │ per-call options, status mapping, ApiResponse<T>      │
//! └──────────────┬──────────────────────────┬────────────┘
//!                │                          │
//! ┌──────────────▼─────────────┐  ┌─────────▼─────────────┐
//! │ HttpClient (HttpTransport) │  │  Resource Serializer  │
//! │ reqwest, HTTPS only        │  │  naming, dates, JSON  │
//! └────────────────────────────┘  └───────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## 1. Fetch a Payment
//!
//! ```rust,no_run
//! use mercadopago::{MercadoPagoClient, MercadoPagoConfig};
//!
//! # async fn example() -> mercadopago::error::Result<()> {
//! let client = MercadoPagoClient::new(MercadoPagoConfig::new("APP_USR-..."))?;
//!
//! let payment = client.payments().get(1_234_567_890).await?;
//! println!("status: {:?}", payment.status);
//! println!("http status: {}", payment.status_code());
//! # Ok(())
//! # }
//! ```
//!
//! ## 2. Create an Order
//!
//! ```rust,no_run
//! use mercadopago::{
//!     MercadoPagoClient, MercadoPagoConfig,
//!     resources::{OrderCreateRequest, order::OrderPayer},
//! };
//!
//! # async fn example() -> mercadopago::error::Result<()> {
//! let client = MercadoPagoClient::new(MercadoPagoConfig::from_env()?)?;
//!
//! let request = OrderCreateRequest {
//!     order_type: Some("online".to_owned()),
//!     external_reference: Some("ext_ref_1234".to_owned()),
//!     total_amount: Some("1000.00".to_owned()),
//!     processing_mode: Some("manual".to_owned()),
//!     payer: Some(OrderPayer {
//!         email: Some("buyer@example.com".to_owned()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let order = client.orders().create(&request).await?;
//! println!("order id: {:?}", order.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## 3. Work With the Wire Format Directly
//!
//! ```rust
//! use mercadopago::{resources::MerchantOrderShipment, serialization};
//!
//! # fn example() -> mercadopago::error::Result<()> {
//! let shipment: MerchantOrderShipment = serialization::deserialize_from_json(
//!     r#"{"id": 7, "shipping_type": "custom", "date_created": "2024-03-01T10:15:30.500+0000"}"#,
//! )?;
//! assert_eq!(shipment.shipping_type.as_deref(), Some("custom"));
//!
//! let wire = serialization::serialize_to_json(&shipment)?;
//! assert_eq!(wire["date_created"], "2024-03-01T10:15:30.500+0000");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: [`MercadoPagoClient`] and the per-resource clients
//! - [`resources`]: request and response shapes
//! - [`serialization`]: the wire-format contract (naming, dates, omission of unset
//!   fields)
//! - [`transport`]: the [`HttpClient`](transport::HttpClient) collaborator and its
//!   reqwest implementation
//! - [`config`]: SDK configuration from TOML or the environment
//! - [`error`]: Error types
//!
//! # Behavior
//!
//! - **HTTPS only**: the transport refuses plain HTTP URIs
//! - **Idempotency**: `POST`, `PUT` and `PATCH` carry a fresh `X-Idempotency-Key`
//!   unless the caller sets one
//! - **No retries**: failed calls surface as errors; resending is the caller's
//!   decision
//! - **Fail-fast parsing**: a malformed date fails the whole response
//!
//! # Error Handling
//!
//! All operations return [`Result<T, MpError>`](error::Result):
//!
//! ```rust,no_run
//! use mercadopago::{MercadoPagoClient, MercadoPagoConfig, MpError};
//!
//! # async fn example(client: MercadoPagoClient) {
//! match client.orders().get("ORD01J49MMW3SSBK5PSV3DFR32959").await {
//!     Ok(order) => println!("status: {:?}", order.status),
//!     Err(MpError::Api { status: 404, .. }) => eprintln!("no such order"),
//!     Err(MpError::Api { status, message, .. }) => eprintln!("API error {status}: {message}"),
//!     Err(MpError::HttpError(e)) => eprintln!("network error: {e}"),
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and criterion"
)]

pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod serialization;
pub mod transport;

pub use client::{ApiResponse, MercadoPagoClient, RequestOptions};
pub use config::MercadoPagoConfig;
pub use error::{MpError, Result, SerializationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _ = std::marker::PhantomData::<MpError>;
        let _ = std::marker::PhantomData::<MercadoPagoClient>;
        let _ = RequestOptions::default();
    }
}
