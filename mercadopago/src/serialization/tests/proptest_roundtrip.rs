use chrono::{DateTime, FixedOffset};
use proptest::{collection, option, prelude::*};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::resources::OpenMap;
use crate::resources::merchant_order::{
    MerchantOrder, MerchantOrderItem, MerchantOrderReceiverAddress, MerchantOrderShipment,
    MerchantOrderShippingOption,
};
use crate::resources::order::{Order, OrderItem, OrderPayment, OrderTransactions};
use crate::resources::payment::{
    Payment, PaymentAdditionalInfo, PaymentItem, PaymentTransactionDetails,
};
use crate::resources::point::{PointPaymentIntent, PointPaymentIntentPayment};
use crate::serialization::date::{format_date, parse_date};
use crate::serialization::naming::to_wire_name;
use crate::serialization::{
    deserialize_from_json, deserialize_from_slice, deserialize_from_value, serialize_to_json,
    serialize_to_vec,
};

/// Largest mantissa a `Decimal` holds (96 bits).
const MAX_MANTISSA: i128 = (1 << 96) - 1;

/// Millisecond instants between 1970 and 2100 with a whole-minute offset.
fn wire_date() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (0_i64..4_102_444_800_000, -720_i32..=840).prop_filter_map(
        "instant out of range",
        |(millis, offset_minutes)| {
            let offset = FixedOffset::east_opt(offset_minutes * 60)?;
            Some(DateTime::from_timestamp_millis(millis)?.with_timezone(&offset))
        },
    )
}

/// Any decimal, including the extremes and every scale.
fn decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        Just(Decimal::MIN),
        Just(Decimal::ZERO),
        (-MAX_MANTISSA..=MAX_MANTISSA, 0_u32..=28).prop_filter_map(
            "mantissa out of range",
            |(mantissa, scale)| Decimal::try_from_i128_with_scale(mantissa, scale).ok(),
        ),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9_f64..1.0e9).prop_map(Value::from),
        "[A-Za-z0-9 ]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            collection::hash_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn open_map() -> impl Strategy<Value = OpenMap> {
    collection::hash_map("[a-z_]{1,12}", json_value(), 0..4)
}

fn receiver_address() -> impl Strategy<Value = MerchantOrderReceiverAddress> {
    (
        option::of("[A-Za-z .]{1,20}"),
        option::of("[0-9]{1,6}"),
        option::of("[0-9]{4,8}"),
        option::of("[A-Za-z ]{1,20}"),
    )
        .prop_map(|(street_name, street_number, zip_code, city_name)| {
            MerchantOrderReceiverAddress {
                street_name,
                street_number,
                zip_code,
                city_name,
                ..Default::default()
            }
        })
}

fn shipping_option() -> impl Strategy<Value = MerchantOrderShippingOption> {
    (option::of("[A-Za-z ]{1,20}"), option::of(decimal()), option::of(decimal())).prop_map(
        |(name, cost, list_cost)| MerchantOrderShippingOption {
            name,
            cost,
            list_cost,
            ..Default::default()
        },
    )
}

fn shipment() -> impl Strategy<Value = MerchantOrderShipment> {
    (
        (
            option::of(any::<i64>()),
            option::of("[a-z_]{1,16}"),
            option::of("[a-z0-9]{1,8}"),
            option::of("[a-z_]{1,16}"),
            option::of("[a-z_]{1,16}"),
        ),
        (option::of(wire_date()), option::of(wire_date()), option::of(wire_date())),
        (option::of("[0-9]{1,6}"), option::of(any::<i64>()), option::of(any::<i64>())),
        option::of(receiver_address()),
        option::of(shipping_option()),
        option::of(collection::vec(open_map(), 0..3)),
    )
        .prop_map(
            |(
                (id, shipping_type, shipping_mode, picking_type, status),
                (date_created, last_modified, date_first_printed),
                (service_id, sender_id, receiver_id),
                receiver_address,
                shipping_option,
                items,
            )| MerchantOrderShipment {
                id,
                shipping_type,
                shipping_mode,
                picking_type,
                status,
                items,
                date_created,
                last_modified,
                date_first_printed,
                service_id,
                sender_id,
                receiver_id,
                receiver_address,
                shipping_option,
                ..Default::default()
            },
        )
}

fn merchant_order_item() -> impl Strategy<Value = MerchantOrderItem> {
    (option::of("[a-z0-9-]{1,12}"), option::of(any::<i32>()), option::of(decimal())).prop_map(
        |(id, quantity, unit_price)| MerchantOrderItem {
            id,
            quantity,
            unit_price,
            ..Default::default()
        },
    )
}

fn merchant_order() -> impl Strategy<Value = MerchantOrder> {
    (
        option::of(any::<i64>()),
        (option::of(decimal()), option::of(decimal()), option::of(decimal())),
        option::of(collection::vec(merchant_order_item(), 0..4)),
        option::of(collection::vec(shipment(), 0..3)),
        option::of(wire_date()),
    )
        .prop_map(
            |(id, (total_amount, paid_amount, shipping_cost), items, shipments, date_created)| {
                MerchantOrder {
                    id,
                    total_amount,
                    paid_amount,
                    shipping_cost,
                    items,
                    shipments,
                    date_created,
                    ..Default::default()
                }
            },
        )
}

fn payment() -> impl Strategy<Value = Payment> {
    (
        (option::of(any::<i64>()), option::of("[a-z_]{1,16}"), option::of(any::<bool>())),
        (option::of(decimal()), option::of(decimal())),
        (option::of(decimal()), option::of(decimal())),
        option::of(collection::vec(
            (option::of("[a-z0-9]{1,8}"), option::of(decimal())),
            0..3,
        )),
        option::of(open_map()),
        (option::of(wire_date()), option::of(wire_date())),
    )
        .prop_map(
            |(
                (id, status, captured),
                (transaction_amount, transaction_amount_refunded),
                (net_received_amount, installment_amount),
                items,
                metadata,
                (date_created, date_approved),
            )| Payment {
                id,
                status,
                captured,
                transaction_amount,
                transaction_amount_refunded,
                transaction_details: Some(PaymentTransactionDetails {
                    net_received_amount,
                    installment_amount,
                    ..Default::default()
                }),
                additional_info: items.map(|items| PaymentAdditionalInfo {
                    items: Some(
                        items
                            .into_iter()
                            .map(|(id, unit_price)| PaymentItem {
                                id,
                                unit_price,
                                ..Default::default()
                            })
                            .collect(),
                    ),
                    ..Default::default()
                }),
                metadata,
                date_created,
                date_approved,
                ..Default::default()
            },
        )
}

fn order() -> impl Strategy<Value = Order> {
    let amount = "[0-9]{1,6}\\.[0-9]{2}";
    (
        (option::of("[A-Z0-9]{1,12}"), option::of("online|point"), option::of(amount)),
        option::of(collection::vec(
            (option::of("[A-Za-z ]{1,12}"), option::of(amount), option::of(1_i32..100)),
            0..3,
        )),
        option::of(collection::vec(
            (option::of("PAY[0-9]{1,6}"), option::of(amount), option::of(wire_date())),
            0..3,
        )),
        option::of(open_map()),
        (option::of(wire_date()), option::of(wire_date())),
    )
        .prop_map(
            |(
                (id, order_type, total_amount),
                items,
                payments,
                integration_data,
                (created_date, last_updated_date),
            )| Order {
                id,
                order_type,
                total_amount,
                items: items.map(|items| {
                    items
                        .into_iter()
                        .map(|(title, unit_price, quantity)| OrderItem {
                            title,
                            unit_price,
                            quantity,
                            ..Default::default()
                        })
                        .collect()
                }),
                transactions: payments.map(|payments| OrderTransactions {
                    payments: Some(
                        payments
                            .into_iter()
                            .map(|(id, amount, date_of_expiration)| OrderPayment {
                                id,
                                amount,
                                date_of_expiration,
                                ..Default::default()
                            })
                            .collect(),
                    ),
                    refunds: None,
                }),
                integration_data,
                created_date,
                last_updated_date,
                ..Default::default()
            },
        )
}

fn point_payment_intent() -> impl Strategy<Value = PointPaymentIntent> {
    (
        option::of("[a-f0-9-]{1,36}"),
        option::of("[A-Z_0-9]{1,24}"),
        option::of(any::<i64>()),
        option::of("OPEN|FINISHED|CANCELED"),
        option::of((option::of(any::<i64>()), option::of("credit_card|debit_card"))),
    )
        .prop_map(|(id, device_id, amount, state, payment)| PointPaymentIntent {
            id,
            device_id,
            amount,
            state,
            payment: payment.map(|(id, payment_type)| PointPaymentIntentPayment {
                id,
                payment_type,
                ..Default::default()
            }),
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_shipment_roundtrip(original in shipment()) {
        let body = serialize_to_vec(&original).unwrap();
        let parsed: MerchantOrderShipment = deserialize_from_slice(&body).unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn test_shipment_sequence_roundtrip(shipments in collection::vec(shipment(), 0..5)) {
        let json = serde_json::to_string(&shipments).unwrap();
        let parsed: Vec<MerchantOrderShipment> = deserialize_from_json(&json).unwrap();
        prop_assert_eq!(parsed, shipments);
    }

    #[test]
    fn test_merchant_order_roundtrip(original in merchant_order()) {
        let body = serialize_to_vec(&original).unwrap();
        let parsed: MerchantOrder = deserialize_from_slice(&body).unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn test_payment_roundtrip(original in payment()) {
        let body = serialize_to_vec(&original).unwrap();
        let parsed: Payment = deserialize_from_slice(&body).unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn test_payment_value_roundtrip(original in payment()) {
        let wire = serialize_to_json(&original).unwrap();
        let parsed: Payment = deserialize_from_value(Value::Object(wire)).unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn test_order_roundtrip(original in order()) {
        let body = serialize_to_vec(&original).unwrap();
        let parsed: Order = deserialize_from_slice(&body).unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn test_point_payment_intent_roundtrip(original in point_payment_intent()) {
        let body = serialize_to_vec(&original).unwrap();
        let parsed: PointPaymentIntent = deserialize_from_slice(&body).unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn test_decimal_keeps_exact_digits(amount in decimal()) {
        let item = MerchantOrderItem { unit_price: Some(amount), ..Default::default() };
        let wire = serialize_to_json(&item).unwrap();
        prop_assert_eq!(wire["unit_price"].to_string(), amount.to_string());

        let parsed: MerchantOrderItem = deserialize_from_value(Value::Object(wire)).unwrap();
        prop_assert_eq!(parsed.unit_price, Some(amount));
    }

    #[test]
    fn test_date_format_parse_symmetry(instant in wire_date()) {
        let parsed = parse_date(&format_date(&instant)).unwrap();
        prop_assert_eq!(parsed, instant);
        prop_assert_eq!(parsed.offset(), instant.offset());
    }

    #[test]
    fn test_date_with_second_offset_keeps_instant(
        instant in wire_date(),
        offset_seconds in -43_199_i32..=50_399,
    ) {
        let Some(offset) = FixedOffset::east_opt(offset_seconds) else {
            return Ok(());
        };
        let shifted = instant.with_timezone(&offset);
        let parsed = parse_date(&format_date(&shifted)).unwrap();
        prop_assert_eq!(parsed, shifted);
        prop_assert_eq!(parsed.offset().local_minus_utc() % 60, 0);
    }

    #[test]
    fn test_wire_names_have_no_upper_case(name in "[a-z][a-zA-Z]{0,24}") {
        let wire = to_wire_name(&name);
        prop_assert!(!wire.chars().any(char::is_uppercase));
        prop_assert_eq!(wire.replace('_', ""), name.to_lowercase());
    }
}
