//! Resource serializer.
//!
//! Single chokepoint for turning typed resources into wire JSON and back. Every client
//! and every resource relies on the same contract:
//!
//! - wire keys are `lower_case_with_underscores` (see [`naming`])
//! - dates use `yyyy-MM-ddTHH:mm:ss.SSS±HHMM` (see [`date`])
//! - unset attributes are omitted instead of being sent as `null`
//! - unknown keys in a response are ignored, missing keys leave attributes unset
//! - malformed JSON or a malformed date rejects the whole document
//!
//! The serializer has no state. Its configuration is a set of constants, so every
//! function here is a pure transform that can be called from any thread.
//!
//! # Examples
//!
//! ```
//! use mercadopago::resources::merchant_order::MerchantOrderShipment;
//! use mercadopago::serialization::{deserialize_from_json, serialize_to_json};
//!
//! let shipment: MerchantOrderShipment =
//!     deserialize_from_json(r#"{"id": 1, "shipping_type": "express", "extra": true}"#)?;
//! assert_eq!(shipment.shipping_type.as_deref(), Some("express"));
//!
//! let wire = serialize_to_json(&shipment)?;
//! assert_eq!(wire.len(), 2);
//! assert!(wire.contains_key("shipping_type"));
//! # Ok::<(), mercadopago::error::SerializationError>(())
//! ```

pub mod date;
pub mod naming;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::SerializationError;

/// Wire representation of a resource: a JSON object.
pub type JsonObject = serde_json::Map<String, Value>;

/// Serializes a resource into a JSON object.
///
/// # Errors
///
/// Returns [`SerializationError::Serialize`] if the value cannot be represented as
/// JSON, and [`SerializationError::NotAnObject`] if it serializes to anything other
/// than an object.
pub fn serialize_to_json<T: Serialize + ?Sized>(
    resource: &T,
) -> Result<JsonObject, SerializationError> {
    match serde_json::to_value(resource) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(SerializationError::NotAnObject { resource: short_type_name::<T>() }),
        Err(source) => {
            Err(SerializationError::Serialize { resource: short_type_name::<T>(), source })
        }
    }
}

/// Serializes a resource into a JSON request body.
///
/// # Errors
///
/// Same as [`serialize_to_json`].
pub fn serialize_to_vec<T: Serialize + ?Sized>(
    resource: &T,
) -> Result<Vec<u8>, SerializationError> {
    let object = serialize_to_json(resource)?;
    serde_json::to_vec(&object).map_err(|source| SerializationError::Serialize {
        resource: short_type_name::<T>(),
        source,
    })
}

/// Deserializes a JSON document into the resource type `T`.
///
/// # Errors
///
/// Returns [`SerializationError::Deserialize`] for malformed JSON, type mismatches
/// and malformed dates.
pub fn deserialize_from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(deserialize_error::<T>)
}

/// Deserializes a raw response body into the resource type `T`.
///
/// # Errors
///
/// Same as [`deserialize_from_json`].
pub fn deserialize_from_slice<T: DeserializeOwned>(body: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(body).map_err(deserialize_error::<T>)
}

/// Deserializes an already parsed JSON value into the resource type `T`.
///
/// # Errors
///
/// Same as [`deserialize_from_json`].
pub fn deserialize_from_value<T: DeserializeOwned>(value: Value) -> Result<T, SerializationError> {
    serde_json::from_value(value).map_err(deserialize_error::<T>)
}

/// Deserializes a response body that may be empty.
///
/// An empty or whitespace-only body yields `T::default()`. Anything else goes
/// through [`deserialize_from_slice`].
///
/// # Errors
///
/// Same as [`deserialize_from_json`].
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    body: &[u8],
) -> Result<T, SerializationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    deserialize_from_slice(body)
}

fn deserialize_error<T>(source: serde_json::Error) -> SerializationError {
    SerializationError::Deserialize { resource: short_type_name::<T>(), source }
}

/// Type name without its module path, used to label serialization errors.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}

#[cfg(test)]
#[path = "tests/proptest_roundtrip.rs"]
mod proptest_roundtrip;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::resources::merchant_order::{
        MerchantOrder, MerchantOrderItem, MerchantOrderReceiverAddress, MerchantOrderShipment,
    };

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<i64>,
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let counter: Counter =
            deserialize_from_json(r#"{"id": 1, "extra_unknown_field": "x"}"#).unwrap();
        assert_eq!(counter.id, Some(1));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let shipment = MerchantOrderShipment {
            id: Some(7),
            shipping_type: Some("express".to_owned()),
            ..Default::default()
        };

        let wire = serialize_to_json(&shipment).unwrap();
        assert_eq!(Value::Object(wire), json!({"id": 7, "shipping_type": "express"}));
    }

    #[test]
    fn test_empty_resource_serializes_to_empty_object() {
        let wire = serialize_to_json(&MerchantOrderShipment::default()).unwrap();
        assert!(wire.is_empty());
    }

    #[test]
    fn test_shipment_keys_follow_naming_transform() {
        let json = r#"{
            "id": 42,
            "shipping_type": "express",
            "shipping_mode": "me2",
            "picking_type": "cross_docking",
            "status": "ready_to_ship",
            "shipping_substatus": "printed",
            "date_created": "2024-03-01T10:15:30.500+0000",
            "date_first_printed": "2024-03-02T08:00:00.000-0300",
            "service_id": "11",
            "sender_id": 22,
            "receiver_id": 33,
            "items": [{"id": "MLA1", "quantity": 2}],
            "receiver_address": {"zip_code": "1414", "street_name": "Av. Corrientes"}
        }"#;

        let shipment: MerchantOrderShipment = deserialize_from_json(json).unwrap();
        assert_eq!(shipment.id, Some(42));
        assert_eq!(shipment.shipping_type.as_deref(), Some("express"));
        assert_eq!(shipment.shipping_substatus.as_deref(), Some("printed"));
        assert_eq!(shipment.service_id.as_deref(), Some("11"));
        assert_eq!(
            shipment.date_created,
            Some((Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap()
                + Duration::milliseconds(500))
            .fixed_offset())
        );
        assert!(shipment.last_modified.is_none());

        let items = shipment.items.as_ref().unwrap();
        assert_eq!(items[0].get("id"), Some(&json!("MLA1")));

        let address = shipment.receiver_address.as_ref().unwrap();
        assert_eq!(address.zip_code.as_deref(), Some("1414"));

        let wire = serialize_to_json(&shipment).unwrap();
        assert_eq!(wire["date_first_printed"], json!("2024-03-02T08:00:00.000-0300"));
        assert_eq!(wire["receiver_address"]["street_name"], json!("Av. Corrientes"));
        assert!(!wire.contains_key("last_modified"));
    }

    #[test]
    fn test_nested_sequences_roundtrip() {
        let order = MerchantOrder {
            id: Some(99),
            items: Some(vec![
                MerchantOrderItem {
                    id: Some("item-1".to_owned()),
                    quantity: Some(2),
                    unit_price: Some(Decimal::new(1005, 1)),
                    ..Default::default()
                },
                MerchantOrderItem { id: Some("item-2".to_owned()), ..Default::default() },
            ]),
            shipments: Some(vec![MerchantOrderShipment {
                id: Some(1),
                receiver_address: Some(MerchantOrderReceiverAddress {
                    city_name: Some("Buenos Aires".to_owned()),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let body = serialize_to_vec(&order).unwrap();
        let parsed: MerchantOrder = deserialize_from_slice(&body).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn test_decimal_amounts_stay_exact() {
        let precise = "12345678901234567.89".parse::<Decimal>().unwrap();
        for amount in [precise, Decimal::MAX, Decimal::MIN, Decimal::new(481, 2)] {
            let item = MerchantOrderItem { unit_price: Some(amount), ..Default::default() };

            let body = serialize_to_vec(&item).unwrap();
            let text = String::from_utf8(body.clone()).unwrap();
            assert_eq!(text, format!(r#"{{"unit_price":{amount}}}"#));

            let parsed: MerchantOrderItem = deserialize_from_slice(&body).unwrap();
            assert_eq!(parsed.unit_price, Some(amount));
        }
    }

    #[test]
    fn test_decimal_amount_keeps_scale_on_wire() {
        let item =
            MerchantOrderItem { unit_price: Some(Decimal::new(2550, 2)), ..Default::default() };
        let wire = serialize_to_json(&item).unwrap();
        assert_eq!(wire["unit_price"].to_string(), "25.50");
    }

    #[test]
    fn test_malformed_date_fails_whole_document() {
        let err = deserialize_from_json::<MerchantOrderShipment>(
            r#"{"id": 1, "date_created": "not-a-date"}"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SerializationError::Deserialize { resource: "MerchantOrderShipment", .. }
        ));
        assert!(!err.is_syntax());
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_malformed_json_is_syntax_error() {
        let err = deserialize_from_json::<Counter>(r#"{"id": "#).unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_type_mismatch_is_not_syntax_error() {
        let err = deserialize_from_json::<Counter>(r#"{"id": "one"}"#).unwrap_err();
        assert!(!err.is_syntax());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = serialize_to_json(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, SerializationError::NotAnObject { .. }));

        let err = serialize_to_json("plain string").unwrap_err();
        assert!(matches!(err, SerializationError::NotAnObject { resource: "str" }));
    }

    #[test]
    fn test_open_maps_serialize_as_objects() {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_owned(), json!("pos"));
        let wire = serialize_to_json(&metadata).unwrap();
        assert_eq!(wire["source"], json!("pos"));
    }

    #[test]
    fn test_deserialize_from_value() {
        let counter: Counter = deserialize_from_value(json!({"id": 5})).unwrap();
        assert_eq!(counter, Counter { id: Some(5) });
    }

    #[test]
    fn test_deserialize_or_default_accepts_empty_body() {
        let counter: Counter = deserialize_or_default(b"").unwrap();
        assert_eq!(counter, Counter::default());

        let counter: Counter = deserialize_or_default(b"  \n").unwrap();
        assert_eq!(counter, Counter::default());

        let counter: Counter = deserialize_or_default(br#"{"id": 3}"#).unwrap();
        assert_eq!(counter.id, Some(3));

        assert!(deserialize_or_default::<Counter>(b"<html>").is_err());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Counter>(), "Counter");
        assert_eq!(short_type_name::<str>(), "str");
        assert!(short_type_name::<Vec<Counter>>().starts_with("Vec<"));
    }
}
