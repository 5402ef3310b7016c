//! Point resources (`/point/integration-api`).
//!
//! Point is the in-person card terminal line. A payment intent asks a terminal to
//! charge an amount; the terminal reports the outcome through intent events.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Query date format of the payment intent list endpoint.
const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Payload for creating a payment intent on a terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPaymentIntentRequest {
    /// Amount to charge in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Description shown on the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payment constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PointPaymentIntentPaymentRequest>,
    /// Ticket and reference data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<PointPaymentIntentAdditionalInfoRequest>,
}

/// Payment constraints of a payment intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPaymentIntentPaymentRequest {
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    /// Who pays the installment cost: `seller` or `buyer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments_cost: Option<String>,
    /// Card type, e.g. `credit_card`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Voucher type for meal cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_type: Option<String>,
}

/// Ticket and reference data of a payment intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPaymentIntentAdditionalInfoRequest {
    /// Merchant-side reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Whether the terminal prints a receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_on_terminal: Option<bool>,
    /// Ticket number printed on the receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
}

/// Payment intent as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPaymentIntent {
    /// Payment intent identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Terminal the intent was sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Amount to charge in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Description shown on the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Intent state, e.g. `OPEN`, `PROCESSING` or `FINISHED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Payment created by the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PointPaymentIntentPayment>,
    /// Ticket and reference data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<PointPaymentIntentAdditionalInfoRequest>,
}

/// Payment created by a terminal for a payment intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPaymentIntentPayment {
    /// Payment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Number of installments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    /// Who pays the installment cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments_cost: Option<String>,
    /// Card type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Voucher type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_type: Option<String>,
}

/// Date range for listing payment intent events.
///
/// Rendered as `startDate` / `endDate` query parameters in `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointPaymentIntentListRequest {
    /// First day of the range.
    pub start_date: NaiveDate,
    /// Last day of the range.
    pub end_date: NaiveDate,
}

impl PointPaymentIntentListRequest {
    /// Creates a request for the given range.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    /// Query parameters of the request.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        vec![
            ("startDate".to_owned(), self.start_date.format(QUERY_DATE_FORMAT).to_string()),
            ("endDate".to_owned(), self.end_date.format(QUERY_DATE_FORMAT).to_string()),
        ]
    }
}

/// Payment intent events in a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPaymentIntentList {
    /// Events, oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<PointSearchPaymentIntentEvent>>,
}

/// One payment intent event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSearchPaymentIntentEvent {
    /// Payment intent identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<String>,
    /// Intent state after the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Day the event happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<NaiveDate>,
}

/// Answer to a payment intent cancellation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointCancelPaymentIntent {
    /// Identifier of the cancelled intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Last known state of a payment intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointStatusPaymentIntent {
    /// Intent state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the state was reached.
    #[serde(default, with = "crate::serialization::date::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<FixedOffset>>,
}

/// Filters for listing terminals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointDevicesRequest {
    /// Only terminals of this store.
    pub store_id: Option<String>,
    /// Only terminals of this point of sale.
    pub pos_id: Option<i64>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
}

impl PointDevicesRequest {
    /// Query parameters of the request. Unset filters are left out.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(store_id) = &self.store_id {
            params.push(("store_id".to_owned(), store_id.clone()));
        }
        if let Some(pos_id) = self.pos_id {
            params.push(("pos_id".to_owned(), pos_id.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_owned(), offset.to_string()));
        }
        params
    }
}

/// Page of terminals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDevices {
    /// Terminals in this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<PointDevice>>,
    /// Page position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<PointDevicesPaging>,
}

/// Page position of a terminal listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDevicesPaging {
    /// Total number of terminals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Page offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Point terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDevice {
    /// Terminal identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Point of sale the terminal is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_id: Option<i64>,
    /// Store the terminal is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Merchant-side point of sale reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_pos_id: Option<String>,
    /// Current operating mode, `PDV` or `STANDALONE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_mode: Option<String>,
}

/// Terminal operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingMode {
    /// Integrated with a point of sale; charges come from payment intents.
    Pdv,
    /// Charges are typed on the terminal.
    Standalone,
}

/// Payload for changing a terminal's operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDeviceOperatingModeRequest {
    /// Target mode.
    pub operating_mode: OperatingMode,
}

/// Answer to an operating mode change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDeviceOperatingMode {
    /// Mode now in effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_mode: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::serialization::{deserialize_from_json, serialize_to_json};

    #[test]
    fn test_list_request_params() {
        let request = PointPaymentIntentListRequest::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        );

        assert_eq!(
            request.params(),
            vec![
                ("startDate".to_owned(), "2024-01-05".to_owned()),
                ("endDate".to_owned(), "2024-02-29".to_owned()),
            ]
        );
    }

    #[test]
    fn test_devices_request_skips_unset_filters() {
        let request = PointDevicesRequest {
            store_id: Some("store-1".to_owned()),
            limit: Some(50),
            ..Default::default()
        };

        assert_eq!(
            request.params(),
            vec![
                ("store_id".to_owned(), "store-1".to_owned()),
                ("limit".to_owned(), "50".to_owned()),
            ]
        );
        assert!(PointDevicesRequest::default().params().is_empty());
    }

    #[test]
    fn test_payment_intent_request_wire_shape() {
        let request = PointPaymentIntentRequest {
            amount: Some(1500),
            description: Some("table 4".to_owned()),
            payment: Some(PointPaymentIntentPaymentRequest {
                installments: Some(1),
                payment_type: Some("credit_card".to_owned()),
                ..Default::default()
            }),
            additional_info: Some(PointPaymentIntentAdditionalInfoRequest {
                external_reference: Some("ref-1".to_owned()),
                print_on_terminal: Some(true),
                ..Default::default()
            }),
        };

        let wire = serialize_to_json(&request).unwrap();
        assert_eq!(
            serde_json::Value::Object(wire),
            json!({
                "amount": 1500,
                "description": "table 4",
                "payment": {"installments": 1, "type": "credit_card"},
                "additional_info": {"external_reference": "ref-1", "print_on_terminal": true}
            })
        );
    }

    #[test]
    fn test_event_list_parses_plain_dates() {
        let list: PointPaymentIntentList = deserialize_from_json(
            r#"{"events": [
                {"payment_intent_id": "pi-1", "status": "FINISHED", "created_on": "2024-03-01"}
            ]}"#,
        )
        .unwrap();

        let events = list.events.unwrap();
        assert_eq!(events[0].created_on, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(events[0].status.as_deref(), Some("FINISHED"));
    }

    #[test]
    fn test_operating_mode_wire_values() {
        let request = PointDeviceOperatingModeRequest { operating_mode: OperatingMode::Standalone };
        let wire = serialize_to_json(&request).unwrap();
        assert_eq!(wire["operating_mode"], json!("STANDALONE"));
    }
}
