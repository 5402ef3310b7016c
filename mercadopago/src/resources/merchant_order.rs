//! Merchant order resources (`/merchant_orders`).
//!
//! A merchant order groups the payments and shipments that settle one purchase.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resources::common::OpenMap;

/// Merchant order as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantOrder {
    /// Merchant order identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Checkout preference this order was created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_id: Option<String>,
    /// Application that created the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Order state: `opened` or `closed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Payment state of the order, e.g. `paid` or `payment_required`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
    /// Site the order belongs to, e.g. `MLA`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<MerchantOrderPayer>,
    /// Seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector: Option<MerchantOrderCollector>,
    /// Marketplace origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
    /// Sponsor identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<i64>,
    /// Payments applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<MerchantOrderPayment>>,
    /// Shipments of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Vec<MerchantOrderShipment>>,
    /// Purchased items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MerchantOrderItem>>,
    /// URL notified on order changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// Free-form data attached by the integrator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Merchant-side reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Shipping cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
    /// Total amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    /// Amount paid so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Decimal>,
    /// Amount refunded so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<Decimal>,
    /// Whether the order was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<bool>,
    /// Creation date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last update date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<FixedOffset>>,
}

/// Buyer of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantOrderPayer {
    /// Buyer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Buyer nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Seller of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantOrderCollector {
    /// Seller identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Seller email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Seller nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Line item of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantOrderItem {
    /// Item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Item title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Item picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    /// Category identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// ISO 4217 currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
}

/// Payment applied to a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantOrderPayment {
    /// Payment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Amount charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<Decimal>,
    /// Amount paid including fees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_paid_amount: Option<Decimal>,
    /// Shipping cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
    /// Amount refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<Decimal>,
    /// ISO 4217 currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    /// Payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Payment status detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    /// Operation type, e.g. `regular_payment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    /// Approval date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_approved: Option<DateTime<FixedOffset>>,
    /// Creation date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last modification date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<FixedOffset>>,
}

/// Shipment of a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantOrderShipment {
    /// Shipment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Shipping type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<String>,
    /// Shipping mode, e.g. `me2` or `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_mode: Option<String>,
    /// Picking type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picking_type: Option<String>,
    /// Shipment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Shipment substatus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_substatus: Option<String>,
    /// Shipped items. Their shape depends on the shipping mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OpenMap>>,
    /// Creation date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last modification date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// Date the shipping label was first printed.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_first_printed: Option<DateTime<FixedOffset>>,
    /// Shipping service identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Sender identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<i64>,
    /// Receiver identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<i64>,
    /// Destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<MerchantOrderReceiverAddress>,
    /// Chosen shipping option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_option: Option<MerchantOrderShippingOption>,
}

/// Destination address of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantOrderReceiverAddress {
    /// Address identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Full address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    /// Zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    /// Delivery notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    /// Longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
}

/// Shipping option chosen for a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantOrderShippingOption {
    /// Option identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Option name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shipping method identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method_id: Option<i64>,
    /// ISO 4217 currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    /// Cost charged to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    /// List cost before discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_cost: Option<Decimal>,
    /// Estimated delivery window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<MerchantOrderShippingEstimatedDelivery>,
    /// Handling and transit time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<MerchantOrderShippingSpeed>,
}

/// Estimated delivery window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantOrderShippingEstimatedDelivery {
    /// Estimated delivery date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    /// Window start, e.g. `09:00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,
    /// Window end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to: Option<String>,
}

/// Handling and transit time, in hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantOrderShippingSpeed {
    /// Handling time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling: Option<i64>,
    /// Transit time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<i64>,
}

/// Payload for creating or updating a merchant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantOrderRequest {
    /// Checkout preference the order belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_id: Option<String>,
    /// Application identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Site identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<MerchantOrderPayer>,
    /// Sponsor identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<i64>,
    /// Purchased items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MerchantOrderItem>>,
    /// URL notified on order changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// Free-form data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Merchant-side reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Marketplace origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
}
