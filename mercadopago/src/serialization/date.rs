//! Wire date format.
//!
//! Every date on the wire uses `yyyy-MM-ddTHH:mm:ss.SSS±HHMM`: millisecond precision
//! and a numeric UTC offset without a colon. Formatting always produces that pattern.
//! Parsing accepts it and falls back to RFC 3339, which some endpoints answer with
//! (`Z` suffix, `±HH:MM` offsets or other fractional precisions).
//!
//! Resource attributes hook into this module through serde's `with` attribute:
//!
//! ```
//! use chrono::{DateTime, FixedOffset};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Shipment {
//!     #[serde(default, with = "mercadopago::serialization::date::option")]
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     date_created: Option<DateTime<FixedOffset>>,
//! }
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serializer, de};

use crate::error::SerializationError;

/// `strftime` rendition of `yyyy-MM-dd'T'HH:mm:ss.SSSZ`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Formats a timestamp with the wire date pattern.
///
/// Sub-millisecond precision is truncated. The pattern has no room for offset
/// seconds, so an offset carrying them is rounded toward zero to whole minutes and
/// the local time is shifted to keep the same instant.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use mercadopago::serialization::date::format_date;
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let instant = utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap()
///     + chrono::Duration::milliseconds(500);
/// assert_eq!(format_date(&instant), "2024-03-01T10:15:30.500+0000");
/// ```
#[must_use]
pub fn format_date(value: &DateTime<FixedOffset>) -> String {
    let seconds = value.offset().local_minus_utc();
    if seconds % 60 == 0 {
        return value.format(DATE_FORMAT).to_string();
    }
    let offset = FixedOffset::east_opt(seconds - seconds % 60).unwrap_or(*value.offset());
    value.with_timezone(&offset).format(DATE_FORMAT).to_string()
}

/// Parses a wire date.
///
/// # Errors
///
/// Returns [`SerializationError::InvalidDate`] if the input matches neither the wire
/// pattern nor RFC 3339.
pub fn parse_date(value: &str) -> Result<DateTime<FixedOffset>, SerializationError> {
    DateTime::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map_err(|_| SerializationError::InvalidDate { value: value.to_owned() })
}

/// Serializes a required date attribute.
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize<S: Serializer>(
    value: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(value))
}

/// Deserializes a required date attribute.
///
/// # Errors
///
/// Fails if the value is not a string or does not parse as a wire date.
pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<FixedOffset>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(de::Error::custom)
}

/// Adapter for `Option<DateTime<FixedOffset>>` attributes.
///
/// Pair it with `#[serde(default)]` so missing keys stay `None`, and with
/// `skip_serializing_if = "Option::is_none"` so unset dates are omitted.
pub mod option {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{format_date, parse_date};

    /// Serializes an optional date attribute.
    ///
    /// # Errors
    ///
    /// Propagates the serializer's error.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional date attribute. JSON `null` maps to `None`.
    ///
    /// # Errors
    ///
    /// Fails if a present value does not parse as a wire date.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_date(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
