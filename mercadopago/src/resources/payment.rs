//! Payment resources (`/v1/payments`).

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resources::common::{Address, Identification, OpenMap, Phone};

/// Payment as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Payment status, e.g. `approved`, `pending` or `rejected`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Reason behind the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    /// Operation type, e.g. `regular_payment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    /// Payment method, e.g. `visa` or `pix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    /// Payment type, e.g. `credit_card`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type_id: Option<String>,
    /// Card issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,
    /// ISO 4217 currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    /// Description shown to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the payment was made in production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    /// Seller identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_id: Option<i64>,
    /// Sponsor identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<i64>,
    /// Authorization code from the acquirer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<PaymentPayer>,
    /// Free-form data attached by the integrator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OpenMap>,
    /// Fraud-prevention data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<PaymentAdditionalInfo>,
    /// Merchant-side reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Amount charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<Decimal>,
    /// Amount refunded so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount_refunded: Option<Decimal>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    /// Amount breakdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_details: Option<PaymentTransactionDetails>,
    /// Whether an authorized payment was captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<bool>,
    /// Whether the payment can only be approved or rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_mode: Option<bool>,
    /// Text on the buyer's card statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// URL notified on status changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// Creation date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Approval date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_approved: Option<DateTime<FixedOffset>>,
    /// Last update date.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_updated: Option<DateTime<FixedOffset>>,
    /// Expiration date for cash payments.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_expiration: Option<DateTime<FixedOffset>>,
    /// Date the funds become available to the seller.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_release_date: Option<DateTime<FixedOffset>>,
}

/// Buyer of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPayer {
    /// Payer type, e.g. `customer` or `guest`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payer_type: Option<String>,
    /// Payer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Payer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `individual` or `association`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// Fraud-prevention data sent with a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentAdditionalInfo {
    /// Buyer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Purchased items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PaymentItem>>,
    /// Buyer details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<PaymentAdditionalInfoPayer>,
    /// Shipping details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<PaymentShipments>,
}

/// Item listed in [`PaymentAdditionalInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentItem {
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
    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
}

/// Buyer details listed in [`PaymentAdditionalInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAdditionalInfoPayer {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Date the buyer registered with the merchant.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<FixedOffset>>,
}

/// Shipping details listed in [`PaymentAdditionalInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentShipments {
    /// Destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<PaymentReceiverAddress>,
}

/// Destination address of a payment shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceiverAddress {
    /// Zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    /// Floor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    /// Apartment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
}

/// Amount breakdown of a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransactionDetails {
    /// Amount the seller receives after fees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_received_amount: Option<Decimal>,
    /// Amount paid by the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_paid_amount: Option<Decimal>,
    /// Amount paid above the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overpaid_amount: Option<Decimal>,
    /// Amount of each installment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_amount: Option<Decimal>,
    /// Processing financial institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution: Option<String>,
    /// Ticket or voucher URL for offline methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_resource_url: Option<String>,
    /// Reference used to pay offline methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_reference_id: Option<String>,
    /// Acquirer reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquirer_reference: Option<String>,
}

/// Payload for `POST /v1/payments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentCreateRequest {
    /// Amount to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<Decimal>,
    /// Description shown to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payment method, e.g. `visa` or `pix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    /// Card token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    /// Card issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,
    /// Buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<PaymentPayerRequest>,
    /// Merchant-side reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// URL notified on status changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// `false` to only authorize the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    /// Whether the payment can only be approved or rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_mode: Option<bool>,
    /// Text on the buyer's card statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Free-form data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OpenMap>,
    /// Fraud-prevention data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<PaymentAdditionalInfo>,
    /// Expiration date for cash payments.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_expiration: Option<DateTime<FixedOffset>>,
}

/// Buyer sent with [`PaymentCreateRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPayerRequest {
    /// Payer type, e.g. `customer` or `guest`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payer_type: Option<String>,
    /// Customer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Payer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Identification>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `individual` or `association`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::serialization::{deserialize_from_json, serialize_to_json};

    #[test]
    fn test_additional_info_wire_keys() {
        let info = PaymentAdditionalInfo {
            ip_address: Some("10.0.0.1".to_owned()),
            items: Some(vec![PaymentItem {
                id: Some("sku-1".to_owned()),
                quantity: Some(1),
                unit_price: Some(Decimal::new(1500, 0)),
                ..Default::default()
            }]),
            shipments: Some(PaymentShipments {
                receiver_address: Some(PaymentReceiverAddress {
                    zip_code: Some("01310-000".to_owned()),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };

        let wire = serialize_to_json(&info).unwrap();
        assert_eq!(wire["ip_address"], json!("10.0.0.1"));
        assert_eq!(wire["items"][0]["unit_price"], json!(1500));
        assert_eq!(wire["shipments"]["receiver_address"]["zip_code"], json!("01310-000"));
        assert!(!wire.contains_key("payer"));
    }

    #[test]
    fn test_payment_response_parses() {
        let json = r#"{
            "id": 123456789,
            "status": "approved",
            "status_detail": "accredited",
            "transaction_amount": 100.5,
            "date_created": "2024-03-01T10:15:30.500-0400",
            "date_approved": "2024-03-01T10:15:31.000-04:00",
            "payer": {"type": "customer", "email": "buyer@example.com",
                      "identification": {"type": "CPF", "number": "19119119100"}},
            "metadata": {"order_ref": "A-1", "attempt": 2},
            "transaction_details": {"net_received_amount": 95, "total_paid_amount": 100.5},
            "point_of_interaction": {"type": "PIX"}
        }"#;

        let payment: Payment = deserialize_from_json(json).unwrap();
        assert_eq!(payment.id, Some(123_456_789));
        assert_eq!(payment.transaction_amount, Some(Decimal::new(1005, 1)));
        assert!(payment.date_created.is_some());
        assert!(payment.date_approved.is_some());

        let payer = payment.payer.as_ref().unwrap();
        assert_eq!(payer.payer_type.as_deref(), Some("customer"));
        assert_eq!(
            payer.identification.as_ref().and_then(|i| i.number.as_deref()),
            Some("19119119100")
        );

        let metadata = payment.metadata.as_ref().unwrap();
        assert_eq!(metadata["attempt"], json!(2));

        let details = payment.transaction_details.as_ref().unwrap();
        assert_eq!(details.net_received_amount, Some(Decimal::new(95, 0)));
    }

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = PaymentCreateRequest {
            transaction_amount: Some(Decimal::new(250, 0)),
            payment_method_id: Some("pix".to_owned()),
            payer: Some(PaymentPayerRequest {
                email: Some("buyer@example.com".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let wire = serialize_to_json(&request).unwrap();
        assert_eq!(wire.len(), 3);
        assert_eq!(wire["payer"], json!({"email": "buyer@example.com"}));
    }
}
