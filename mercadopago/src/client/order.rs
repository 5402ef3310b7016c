//! `/v1/orders` API.

use std::fmt;

use tracing::{info, instrument};

use super::{ApiResponse, MercadoPagoClient, RequestOptions, require_id};
use crate::{
    error::Result,
    resources::order::{
        Order, OrderCreateRequest, OrderPayment, OrderPaymentRequest, OrderRefundRequest,
        OrderTransactionRequest, OrderTransactions,
    },
    serialization::serialize_to_json,
    transport::{HttpClient, HttpMethod, MpRequest},
};

const ORDERS_PATH: &str = "/v1/orders";

/// Order lifecycle actions that share the `POST /v1/orders/{id}/{action}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderAction {
    Process,
    Cancel,
    Capture,
}

impl OrderAction {
    const fn path_segment(self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::Cancel => "cancel",
            Self::Capture => "capture",
        }
    }
}

/// Client for orders and their payment transactions.
///
/// Obtained from [`MercadoPagoClient::orders`].
pub struct OrderClient<H> {
    client: MercadoPagoClient<H>,
}

impl<H> Clone for OrderClient<H> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone() }
    }
}

impl<H> fmt::Debug for OrderClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderClient").finish_non_exhaustive()
    }
}

impl<H: HttpClient> OrderClient<H> {
    pub(crate) const fn new(client: MercadoPagoClient<H>) -> Self {
        Self { client }
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn create(&self, request: &OrderCreateRequest) -> Result<ApiResponse<Order>> {
        self.create_with_options(request, &RequestOptions::default()).await
    }

    /// [`Self::create`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    #[instrument(skip(self, request, options), fields(external_reference = ?request.external_reference))]
    pub async fn create_with_options(
        &self,
        request: &OrderCreateRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        info!("creating order");

        let request =
            MpRequest::new(HttpMethod::Post, ORDERS_PATH).with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }

    /// Fetches an order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn get(&self, order_id: &str) -> Result<ApiResponse<Order>> {
        self.get_with_options(order_id, &RequestOptions::default()).await
    }

    /// [`Self::get`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    #[instrument(skip(self, options), fields(order_id = %order_id))]
    pub async fn get_with_options(
        &self,
        order_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        info!("fetching order");
        require_id("order_id", order_id)?;

        let request = MpRequest::new(HttpMethod::Get, format!("{ORDERS_PATH}/{order_id}"));
        self.client.execute(request, options).await
    }

    /// Processes an order created in manual processing mode.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn process(&self, order_id: &str) -> Result<ApiResponse<Order>> {
        self.process_with_options(order_id, &RequestOptions::default()).await
    }

    /// [`Self::process`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::process`].
    pub async fn process_with_options(
        &self,
        order_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        self.act(order_id, OrderAction::Process, options).await
    }

    /// Cancels an order that has not been processed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn cancel(&self, order_id: &str) -> Result<ApiResponse<Order>> {
        self.cancel_with_options(order_id, &RequestOptions::default()).await
    }

    /// [`Self::cancel`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::cancel`].
    pub async fn cancel_with_options(
        &self,
        order_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        self.act(order_id, OrderAction::Cancel, options).await
    }

    /// Captures an order created with manual capture.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn capture(&self, order_id: &str) -> Result<ApiResponse<Order>> {
        self.capture_with_options(order_id, &RequestOptions::default()).await
    }

    /// [`Self::capture`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::capture`].
    pub async fn capture_with_options(
        &self,
        order_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        self.act(order_id, OrderAction::Capture, options).await
    }

    #[instrument(skip(self, options), fields(order_id = %order_id, action = action.path_segment()))]
    async fn act(
        &self,
        order_id: &str,
        action: OrderAction,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        info!("sending order action");
        require_id("order_id", order_id)?;

        let request = MpRequest::new(
            HttpMethod::Post,
            format!("{ORDERS_PATH}/{order_id}/{}", action.path_segment()),
        );
        self.client.execute(request, options).await
    }

    /// Refunds an order.
    ///
    /// With `request` unset, or with no transactions in it, the whole order is
    /// refunded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn refund(
        &self,
        order_id: &str,
        request: Option<&OrderRefundRequest>,
    ) -> Result<ApiResponse<Order>> {
        self.refund_with_options(order_id, request, &RequestOptions::default()).await
    }

    /// [`Self::refund`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::refund`].
    #[instrument(skip(self, request, options), fields(order_id = %order_id, partial = request.is_some_and(|r| r.transactions.is_some())))]
    pub async fn refund_with_options(
        &self,
        order_id: &str,
        request: Option<&OrderRefundRequest>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        info!("refunding order");
        require_id("order_id", order_id)?;

        let mut http_request =
            MpRequest::new(HttpMethod::Post, format!("{ORDERS_PATH}/{order_id}/refund"));
        if let Some(request) = request {
            http_request = http_request.with_payload(serialize_to_json(request)?);
        }

        self.client.execute(http_request, options).await
    }

    /// Adds payment transactions to an order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn create_transaction(
        &self,
        order_id: &str,
        request: &OrderTransactionRequest,
    ) -> Result<ApiResponse<OrderTransactions>> {
        self.create_transaction_with_options(order_id, request, &RequestOptions::default()).await
    }

    /// [`Self::create_transaction`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_transaction`].
    #[instrument(skip(self, request, options), fields(order_id = %order_id))]
    pub async fn create_transaction_with_options(
        &self,
        order_id: &str,
        request: &OrderTransactionRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<OrderTransactions>> {
        info!("creating order transaction");
        require_id("order_id", order_id)?;

        let request =
            MpRequest::new(HttpMethod::Post, format!("{ORDERS_PATH}/{order_id}/transactions"))
                .with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }

    /// Updates one payment transaction of an order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn update_transaction(
        &self,
        order_id: &str,
        transaction_id: &str,
        request: &OrderPaymentRequest,
    ) -> Result<ApiResponse<OrderPayment>> {
        self.update_transaction_with_options(
            order_id,
            transaction_id,
            request,
            &RequestOptions::default(),
        )
        .await
    }

    /// [`Self::update_transaction`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update_transaction`].
    #[instrument(skip(self, request, options), fields(order_id = %order_id, transaction_id = %transaction_id))]
    pub async fn update_transaction_with_options(
        &self,
        order_id: &str,
        transaction_id: &str,
        request: &OrderPaymentRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<OrderPayment>> {
        info!("updating order transaction");
        require_id("order_id", order_id)?;
        require_id("transaction_id", transaction_id)?;

        let request = MpRequest::new(
            HttpMethod::Put,
            format!("{ORDERS_PATH}/{order_id}/transactions/{transaction_id}"),
        )
        .with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }

    /// Removes a payment transaction from an order.
    ///
    /// The API answers `204 No Content`; the returned resource is then empty and
    /// only the transport metadata is meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn delete_transaction(
        &self,
        order_id: &str,
        transaction_id: &str,
    ) -> Result<ApiResponse<Order>> {
        self.delete_transaction_with_options(order_id, transaction_id, &RequestOptions::default())
            .await
    }

    /// [`Self::delete_transaction`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::delete_transaction`].
    #[instrument(skip(self, options), fields(order_id = %order_id, transaction_id = %transaction_id))]
    pub async fn delete_transaction_with_options(
        &self,
        order_id: &str,
        transaction_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<Order>> {
        info!("deleting order transaction");
        require_id("order_id", order_id)?;
        require_id("transaction_id", transaction_id)?;

        let request = MpRequest::new(
            HttpMethod::Delete,
            format!("{ORDERS_PATH}/{order_id}/transactions/{transaction_id}"),
        );

        self.client.execute_allow_empty(request, options).await
    }
}
