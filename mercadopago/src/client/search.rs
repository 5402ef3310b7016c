//! Search requests and result pages.

use serde::{Deserialize, Serialize};

use crate::serialization::naming::to_wire_name;

/// Query of a search endpoint.
///
/// Filter keys may be given in `camelCase` or in wire form; both render as
/// `lower_case_with_underscores` query parameters.
///
/// # Examples
///
/// ```
/// use mercadopago::client::SearchRequest;
///
/// let request = SearchRequest::new()
///     .with_limit(10)
///     .with_filter("externalReference", "order-1");
///
/// assert_eq!(
///     request.params(),
///     vec![
///         ("limit".to_owned(), "10".to_owned()),
///         ("external_reference".to_owned(), "order-1".to_owned()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Page size.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
    /// Field filters, in insertion order.
    pub filters: Vec<(String, String)>,
}

impl SearchRequest {
    /// Creates an empty search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a field filter.
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Query parameters: `limit`, `offset`, then the filters.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_owned(), offset.to_string()));
        }
        params.extend(
            self.filters.iter().map(|(key, value)| (to_wire_name(key).into_owned(), value.clone())),
        );
        params
    }
}

/// Page position of a `results` page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// Search page shaped as `{"paging": {...}, "results": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsResourcesPage<T> {
    /// Page position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
    /// Matches in this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<T>>,
}

/// Search page shaped as `{"elements": [...], "next_offset": n, "total": n}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementsResourcesPage<T> {
    /// Matches in this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<T>>,
    /// Offset of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<i64>,
    /// Total number of matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}
