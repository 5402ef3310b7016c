//! Shapes shared by several resources.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Open-ended `string -> JSON` mapping for attributes whose shape the API does not
/// fix, such as `metadata` or `additional_info`.
pub type OpenMap = HashMap<String, serde_json::Value>;

/// Identity document of a payer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    /// Document type, e.g. `DNI` or `CPF`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub identification_type: Option<String>,
    /// Document number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// Phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Area code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// Number without area code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
}
