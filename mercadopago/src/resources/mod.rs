//! Resource shapes.
//!
//! Each submodule mirrors one API family. Every response attribute is optional:
//! absent keys deserialize as `None`, and `None` attributes are left out of the wire
//! JSON. Dates go through [`crate::serialization::date`].

pub mod common;
pub mod merchant_order;
pub mod order;
pub mod payment;
pub mod point;

pub use common::{Address, Identification, OpenMap, Phone};
pub use merchant_order::{MerchantOrder, MerchantOrderRequest, MerchantOrderShipment};
pub use order::{Order, OrderCreateRequest, OrderRefundRequest, OrderTransactionRequest};
pub use payment::{Payment, PaymentAdditionalInfo, PaymentCreateRequest};
pub use point::{
    PointDevices, PointDevicesRequest, PointPaymentIntent, PointPaymentIntentList,
    PointPaymentIntentListRequest, PointPaymentIntentRequest,
};
