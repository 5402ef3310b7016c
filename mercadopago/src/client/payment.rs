//! `/v1/payments` API.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use super::{ApiResponse, MercadoPagoClient, RequestOptions, ResultsResourcesPage, SearchRequest};
use crate::{
    error::Result,
    resources::payment::{Payment, PaymentCreateRequest},
    serialization::serialize_to_json,
    transport::{HttpClient, HttpMethod, MpRequest},
};

const PAYMENTS_PATH: &str = "/v1/payments";

#[derive(Serialize)]
struct PaymentCancelRequest {
    status: &'static str,
}

#[derive(Serialize)]
struct PaymentCaptureRequest {
    capture: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_amount: Option<Decimal>,
}

/// Client for payments.
///
/// Obtained from [`MercadoPagoClient::payments`].
pub struct PaymentClient<H> {
    client: MercadoPagoClient<H>,
}

impl<H> Clone for PaymentClient<H> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone() }
    }
}

impl<H> fmt::Debug for PaymentClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentClient").finish_non_exhaustive()
    }
}

impl<H: HttpClient> PaymentClient<H> {
    pub(crate) const fn new(client: MercadoPagoClient<H>) -> Self {
        Self { client }
    }

    /// Fetches a payment.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn get(&self, payment_id: i64) -> Result<ApiResponse<Payment>> {
        self.get_with_options(payment_id, &RequestOptions::default()).await
    }

    /// [`Self::get`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    #[instrument(skip(self, options))]
    pub async fn get_with_options(
        &self,
        payment_id: i64,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Payment>> {
        info!("fetching payment");

        let request = MpRequest::new(HttpMethod::Get, format!("{PAYMENTS_PATH}/{payment_id}"));
        self.client.execute(request, options).await
    }

    /// Creates a payment.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn create(&self, request: &PaymentCreateRequest) -> Result<ApiResponse<Payment>> {
        self.create_with_options(request, &RequestOptions::default()).await
    }

    /// [`Self::create`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    #[instrument(
        skip(self, request, options),
        fields(
            payment_method_id = ?request.payment_method_id,
            external_reference = ?request.external_reference
        )
    )]
    pub async fn create_with_options(
        &self,
        request: &PaymentCreateRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Payment>> {
        info!("creating payment");

        let request = MpRequest::new(HttpMethod::Post, PAYMENTS_PATH)
            .with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }

    /// Cancels a pending or in-process payment.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn cancel(&self, payment_id: i64) -> Result<ApiResponse<Payment>> {
        self.cancel_with_options(payment_id, &RequestOptions::default()).await
    }

    /// [`Self::cancel`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::cancel`].
    #[instrument(skip(self, options))]
    pub async fn cancel_with_options(
        &self,
        payment_id: i64,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Payment>> {
        info!("cancelling payment");

        let payload = serialize_to_json(&PaymentCancelRequest { status: "cancelled" })?;
        let request = MpRequest::new(HttpMethod::Put, format!("{PAYMENTS_PATH}/{payment_id}"))
            .with_payload(payload);

        self.client.execute(request, options).await
    }

    /// Captures an authorized payment, fully or for `amount`.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn capture(
        &self,
        payment_id: i64,
        amount: Option<Decimal>,
    ) -> Result<ApiResponse<Payment>> {
        self.capture_with_options(payment_id, amount, &RequestOptions::default()).await
    }

    /// [`Self::capture`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::capture`].
    #[instrument(skip(self, options), fields(amount = ?amount))]
    pub async fn capture_with_options(
        &self,
        payment_id: i64,
        amount: Option<Decimal>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Payment>> {
        info!("capturing payment");

        let capture = PaymentCaptureRequest { capture: true, transaction_amount: amount };
        let payload = serialize_to_json(&capture)?;
        let request = MpRequest::new(HttpMethod::Put, format!("{PAYMENTS_PATH}/{payment_id}"))
            .with_payload(payload);

        self.client.execute(request, options).await
    }

    /// Searches payments.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<ApiResponse<ResultsResourcesPage<Payment>>> {
        self.search_with_options(request, &RequestOptions::default()).await
    }

    /// [`Self::search`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    #[instrument(skip(self, request, options), fields(limit = ?request.limit, offset = ?request.offset))]
    pub async fn search_with_options(
        &self,
        request: &SearchRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<ResultsResourcesPage<Payment>>> {
        info!("searching payments");

        let request = MpRequest::new(HttpMethod::Get, format!("{PAYMENTS_PATH}/search"))
            .with_query_params(request.params());

        self.client.execute(request, options).await
    }
}
