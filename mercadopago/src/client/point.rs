//! Point terminal integration API.

use std::fmt;

use tracing::{info, instrument};

use super::{ApiResponse, MercadoPagoClient, RequestOptions, require_id};
use crate::{
    error::Result,
    resources::point::{
        PointCancelPaymentIntent, PointDeviceOperatingMode, PointDeviceOperatingModeRequest,
        PointDevices, PointDevicesRequest, PointPaymentIntent, PointPaymentIntentList,
        PointPaymentIntentListRequest, PointPaymentIntentRequest, PointStatusPaymentIntent,
    },
    serialization::serialize_to_json,
    transport::{HttpClient, HttpMethod, MpRequest},
};

const DEVICES_PATH: &str = "/point/integration-api/devices";
const PAYMENT_INTENTS_PATH: &str = "/point/integration-api/payment-intents";

/// Client for Point devices and their payment intents.
///
/// Obtained from [`MercadoPagoClient::point`].
pub struct PointClient<H> {
    client: MercadoPagoClient<H>,
}

impl<H> Clone for PointClient<H> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone() }
    }
}

impl<H> fmt::Debug for PointClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointClient").finish_non_exhaustive()
    }
}

impl<H: HttpClient> PointClient<H> {
    pub(crate) const fn new(client: MercadoPagoClient<H>) -> Self {
        Self { client }
    }

    /// Creates a payment intent on a device.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty device id, and
    /// any error of [`MercadoPagoClient::send`].
    pub async fn create_payment_intent(
        &self,
        device_id: &str,
        request: &PointPaymentIntentRequest,
    ) -> Result<ApiResponse<PointPaymentIntent>> {
        self.create_payment_intent_with_options(device_id, request, &RequestOptions::default())
            .await
    }

    /// [`Self::create_payment_intent`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_payment_intent`].
    #[instrument(skip(self, request, options), fields(device_id = %device_id, amount = ?request.amount))]
    pub async fn create_payment_intent_with_options(
        &self,
        device_id: &str,
        request: &PointPaymentIntentRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<PointPaymentIntent>> {
        info!("creating point payment intent");
        require_id("device_id", device_id)?;

        let request = MpRequest::new(
            HttpMethod::Post,
            format!("{DEVICES_PATH}/{device_id}/payment-intents"),
        )
        .with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }

    /// Lists payment intent events with their final state in a date range.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn get_payment_intent_list(
        &self,
        request: &PointPaymentIntentListRequest,
    ) -> Result<ApiResponse<PointPaymentIntentList>> {
        self.get_payment_intent_list_with_options(request, &RequestOptions::default()).await
    }

    /// [`Self::get_payment_intent_list`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_payment_intent_list`].
    #[instrument(
        skip(self, request, options),
        fields(start_date = %request.start_date, end_date = %request.end_date)
    )]
    pub async fn get_payment_intent_list_with_options(
        &self,
        request: &PointPaymentIntentListRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<PointPaymentIntentList>> {
        info!("listing point payment intents");

        let request = MpRequest::new(HttpMethod::Get, format!("{PAYMENT_INTENTS_PATH}/events"))
            .with_query_params(request.params());

        self.client.execute(request, options).await
    }

    /// Cancels a payment intent that the device has not processed yet.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn cancel_payment_intent(
        &self,
        device_id: &str,
        payment_intent_id: &str,
    ) -> Result<ApiResponse<PointCancelPaymentIntent>> {
        self.cancel_payment_intent_with_options(
            device_id,
            payment_intent_id,
            &RequestOptions::default(),
        )
        .await
    }

    /// [`Self::cancel_payment_intent`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::cancel_payment_intent`].
    #[instrument(skip(self, options), fields(device_id = %device_id, payment_intent_id = %payment_intent_id))]
    pub async fn cancel_payment_intent_with_options(
        &self,
        device_id: &str,
        payment_intent_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<PointCancelPaymentIntent>> {
        info!("cancelling point payment intent");
        require_id("device_id", device_id)?;
        require_id("payment_intent_id", payment_intent_id)?;

        let request = MpRequest::new(
            HttpMethod::Delete,
            format!("{DEVICES_PATH}/{device_id}/payment-intents/{payment_intent_id}"),
        );

        self.client.execute_allow_empty(request, options).await
    }

    /// Fetches a payment intent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn search_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<ApiResponse<PointPaymentIntent>> {
        self.search_payment_intent_with_options(payment_intent_id, &RequestOptions::default())
            .await
    }

    /// [`Self::search_payment_intent`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search_payment_intent`].
    #[instrument(skip(self, options), fields(payment_intent_id = %payment_intent_id))]
    pub async fn search_payment_intent_with_options(
        &self,
        payment_intent_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<PointPaymentIntent>> {
        info!("fetching point payment intent");
        require_id("payment_intent_id", payment_intent_id)?;

        let request =
            MpRequest::new(HttpMethod::Get, format!("{PAYMENT_INTENTS_PATH}/{payment_intent_id}"));

        self.client.execute(request, options).await
    }

    /// Fetches the last status of a payment intent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty id, and any
    /// error of [`MercadoPagoClient::send`].
    pub async fn get_payment_intent_status(
        &self,
        payment_intent_id: &str,
    ) -> Result<ApiResponse<PointStatusPaymentIntent>> {
        self.get_payment_intent_status_with_options(payment_intent_id, &RequestOptions::default())
            .await
    }

    /// [`Self::get_payment_intent_status`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_payment_intent_status`].
    #[instrument(skip(self, options), fields(payment_intent_id = %payment_intent_id))]
    pub async fn get_payment_intent_status_with_options(
        &self,
        payment_intent_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse<PointStatusPaymentIntent>> {
        info!("fetching point payment intent status");
        require_id("payment_intent_id", payment_intent_id)?;

        let request = MpRequest::new(
            HttpMethod::Get,
            format!("{PAYMENT_INTENTS_PATH}/{payment_intent_id}/events"),
        );

        self.client.execute(request, options).await
    }

    /// Lists the devices of the account, optionally filtered by store or POS.
    ///
    /// # Errors
    ///
    /// Any error of [`MercadoPagoClient::send`].
    pub async fn get_devices(
        &self,
        request: &PointDevicesRequest,
    ) -> Result<ApiResponse<PointDevices>> {
        self.get_devices_with_options(request, &RequestOptions::default()).await
    }

    /// [`Self::get_devices`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_devices`].
    #[instrument(skip(self, request, options), fields(store_id = ?request.store_id, pos_id = ?request.pos_id))]
    pub async fn get_devices_with_options(
        &self,
        request: &PointDevicesRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<PointDevices>> {
        info!("listing point devices");

        let request =
            MpRequest::new(HttpMethod::Get, DEVICES_PATH).with_query_params(request.params());

        self.client.execute(request, options).await
    }

    /// Switches a device between integrated (PDV) and standalone mode.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MpError::InvalidInput`] for an empty device id, and
    /// any error of [`MercadoPagoClient::send`].
    pub async fn change_device_operating_mode(
        &self,
        device_id: &str,
        request: &PointDeviceOperatingModeRequest,
    ) -> Result<ApiResponse<PointDeviceOperatingMode>> {
        self.change_device_operating_mode_with_options(
            device_id,
            request,
            &RequestOptions::default(),
        )
        .await
    }

    /// [`Self::change_device_operating_mode`] with per-call options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::change_device_operating_mode`].
    #[instrument(
        skip(self, request, options),
        fields(device_id = %device_id, operating_mode = ?request.operating_mode)
    )]
    pub async fn change_device_operating_mode_with_options(
        &self,
        device_id: &str,
        request: &PointDeviceOperatingModeRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse<PointDeviceOperatingMode>> {
        info!("changing point device operating mode");
        require_id("device_id", device_id)?;

        let request = MpRequest::new(HttpMethod::Patch, format!("{DEVICES_PATH}/{device_id}"))
            .with_payload(serialize_to_json(request)?);

        self.client.execute(request, options).await
    }
}
