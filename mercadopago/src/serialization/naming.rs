//! Field naming policy.
//!
//! Wire keys are the lower-case, underscore-separated form of a field's conceptual
//! name: `shippingType` travels as `shipping_type`. Resource structs already spell
//! their fields that way, so serde derives the wire keys directly from them. This
//! module applies the same transform to names that only exist at runtime, such as
//! search filter keys.

use std::borrow::Cow;

/// Strategy for turning a conceptual field name into a wire key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldNamingPolicy {
    /// Keys are sent as given.
    Identity,
    /// `camelCase` words are split on upper-case letters, joined with `_` and
    /// lower-cased.
    #[default]
    LowerCaseWithUnderscores,
}

/// Naming policy used for every resource on the wire.
pub const WIRE_NAMING: FieldNamingPolicy = FieldNamingPolicy::LowerCaseWithUnderscores;

impl FieldNamingPolicy {
    /// Translates a conceptual field name into its wire key.
    ///
    /// Names that are already in wire form are returned borrowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mercadopago::serialization::naming::FieldNamingPolicy;
    ///
    /// let policy = FieldNamingPolicy::LowerCaseWithUnderscores;
    /// assert_eq!(policy.translate("shippingType"), "shipping_type");
    /// assert_eq!(policy.translate("shipping_type"), "shipping_type");
    /// ```
    #[must_use]
    pub fn translate<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::Identity => Cow::Borrowed(name),
            Self::LowerCaseWithUnderscores => {
                if !name.chars().any(char::is_uppercase) {
                    return Cow::Borrowed(name);
                }

                let mut translated = String::with_capacity(name.len() + 4);
                for ch in name.chars() {
                    if ch.is_uppercase() && !translated.is_empty() {
                        translated.push('_');
                    }
                    translated.extend(ch.to_lowercase());
                }
                Cow::Owned(translated)
            }
        }
    }
}

/// Translates a conceptual field name with [`WIRE_NAMING`].
#[must_use]
pub fn to_wire_name(name: &str) -> Cow<'_, str> {
    WIRE_NAMING.translate(name)
}
