//! Order resources (`/v1/orders`).
//!
//! The orders API sends amounts as decimal strings (`"100.00"`), so they are kept as
//! `String` here and passed through unchanged.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::resources::common::{Address, Identification, OpenMap, Phone};

/// Order as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, e.g. `ORD01J...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Order type, `online` or `point`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Merchant-side reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Order status, e.g. `created`, `processed` or `canceled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Reason behind the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_mode: Option<String>,
    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_mode: Option<String>,
    /// ISO 3166 country of the seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Seller identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Marketplace origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
    /// Marketplace fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_fee: Option<String>,
    /// Total amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    /// Amount paid so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_paid_amount: Option<String>,
    /// ISO 8601 duration after which an unpaid order expires, e.g. `P3D`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
    /// Payments and refunds of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<OrderTransactions>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<OrderPayer>,
    /// Purchased items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
    /// Integrator data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_data: Option<OpenMap>,
    /// Creation date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<FixedOffset>>,
    /// Last update date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<FixedOffset>>,
}

/// Payments and refunds attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTransactions {
    /// Payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<OrderPayment>>,
    /// Refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<OrderRefund>>,
}

/// Payment transaction of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPayment {
    /// Transaction identifier, e.g. `PAY01J...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifier of the underlying payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Transaction status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Reason behind the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    /// Amount to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Amount charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<String>,
    /// How the transaction is paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<OrderPaymentMethod>,
    /// ISO 8601 duration after which the transaction expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
    /// Expiration date for offline methods.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_expiration: Option<DateTime<FixedOffset>>,
}

/// Payment method of an order transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaymentMethod {
    /// Method identifier, e.g. `master` or `pix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Method type, e.g. `credit_card`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
    /// Card token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    /// Text on the buyer's card statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Ticket URL for offline methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
    /// Barcode content for offline methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_content: Option<String>,
    /// Payment reference for offline methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Verification code for offline methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    /// Processing financial institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution: Option<String>,
    /// QR code payload for instant payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    /// QR code image, base64 encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_base64: Option<String>,
}

/// Refund transaction of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRefund {
    /// Refund identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Payment transaction being refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Identifier of the underlying refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Refunded amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Refund status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Buyer of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayer {
    /// Customer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Payer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
    /// Phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Line item of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Item title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,
    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Merchant-side item code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    /// Category identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Item picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// Payload for `POST /v1/orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderCreateRequest {
    /// Order type, `online` or `point`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Merchant-side reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Total amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_mode: Option<String>,
    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_mode: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<OrderPayer>,
    /// Purchased items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
    /// Payments to attach on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<OrderTransactionRequest>,
    /// ISO 8601 duration after which an unpaid order expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
}

/// Payments to add to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTransactionRequest {
    /// Payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<OrderPaymentRequest>>,
}

/// One payment to add to, or update on, an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaymentRequest {
    /// Amount to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// How the payment is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<OrderPaymentMethod>,
    /// ISO 8601 duration after which the payment expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
}

/// Payload for `POST /v1/orders/{id}/refund`.
///
/// Leave `transactions` unset to refund the whole order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRefundRequest {
    /// Transactions to refund partially.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<OrderRefundTransaction>>,
}

/// Partial refund of one payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRefundTransaction {
    /// Payment transaction identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Amount to refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}
