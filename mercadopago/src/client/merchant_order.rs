//! `/merchant_orders` API.

use std::fmt;

use tracing::{info, instrument};

use super::{ApiResponse, ElementsResourcesPage, MercadoPagoClient, RequestOptions, SearchRequest};
use crate::{
    error::Result,
    resources::merchant_order::{MerchantOrder, MerchantOrderRequest},
    serialization::serialize_to_json,
    transport::{HttpClient, HttpMethod, MpRequest},
};

const MERCHANT_ORDERS_PATH: &str = "/merchant_orders";

/// Client for merchant orders.
///
/// Obtained from [`MercadoPagoClient::merchant_orders`].
pub struct MerchantOrderClient<H> {
    client: MercadoPagoClient<H>,
}

impl<H> Clone for MerchantOrderClient<H> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone() }
    }
}

impl<H> fmt::Debug for MerchantOrderClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantOrderClient").finish_non_exhaustive()
    }
}

impl<H: HttpClient> MerchantOrderClient<H> {
    pub(crate) const fn new(client: MercadoPagoClient<H>) -> Self {
        Self { client }
    }

    /// Fetches a merchant order.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn get(&self, merchant_order_id: i64) -> Result<ApiResponse<MerchantOrder>> {
        self.get_with_options(merchant_order_id, &RequestOptions::default()).await
    }

    /// [`Self::get`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    #[instrument(skip(self, options))]
    pub async fn get_with_options(
        &self,
        merchant_order_id: i64,
        options: &RequestOptions,
    ) -> Result<ApiResponse<MerchantOrder>> {
        info!("fetching merchant order");

        let request = MpRequest::new(
            HttpMethod::Get,
            format!("{MERCHANT_ORDERS_PATH}/{merchant_order_id}"),
        );
        self.client.execute(request, options).await
    }

    /// Creates a merchant order.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn create(
        &self,
        request: &MerchantOrderRequest,
    ) -> Result<ApiResponse<MerchantOrder>> {
        self.create_with_options(request, &RequestOptions::default()).await
    }

    /// [`Self::create`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    #[instrument(skip(self, request, options), fields(preference_id = ?request.preference_id))]
    pub async fn create_with_options(
        &self,
        request: &MerchantOrderRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<MerchantOrder>> {
        info!("creating merchant order");

        let request = MpRequest::new(HttpMethod::Post, MERCHANT_ORDERS_PATH)
            .with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }

    /// Updates a merchant order.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn update(
        &self,
        merchant_order_id: i64,
        request: &MerchantOrderRequest,
    ) -> Result<ApiResponse<MerchantOrder>> {
        self.update_with_options(merchant_order_id, request, &RequestOptions::default()).await
    }

    /// [`Self::update`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update`].
    #[instrument(skip(self, request, options))]
    pub async fn update_with_options(
        &self,
        merchant_order_id: i64,
        request: &MerchantOrderRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<MerchantOrder>> {
        info!("updating merchant order");

        let request = MpRequest::new(
            HttpMethod::Put,
            format!("{MERCHANT_ORDERS_PATH}/{merchant_order_id}"),
        )
        .with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }

    /// Searches merchant orders.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<ApiResponse<ElementsResourcesPage<MerchantOrder>>> {
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
    ) -> Result<ApiResponse<ElementsResourcesPage<MerchantOrder>>> {
        info!("searching merchant orders");

        let request = MpRequest::new(HttpMethod::Get, format!("{MERCHANT_ORDERS_PATH}/search"))
            .with_query_params(request.params());

        self.client.execute(request, options).await
    }
}
