//! Product Model

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Product identifier as delivered by the catalog API.
///
/// The backend emits either a numeric id or a string id depending on
/// the collection; both are stable. Cart lookups compare ids through
/// [`ProductId::matches`], which normalizes to the canonical string
/// form, so `42` and `"42"` address the same product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Str(String),
}

impl ProductId {
    /// Canonical string form used for lookup comparisons.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Str(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Lookup equality: canonical string forms match.
    pub fn matches(&self, other: &ProductId) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Product entity (read-only, owned by the catalog service)
///
/// `price` is the locale-formatted display string (e.g. "KSh 215,000"),
/// not a bare number. The cart engine parses it once at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    pub rating: f64,
    pub reviews: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Free-form specifications (arbitrary JSON from the CMS)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Parse a locale-formatted display price ("KSh 5,900") into a number.
///
/// Strips every character that is not an ASCII digit, `.` or `-`, then
/// parses the remainder as a float. A string with no parseable numeric
/// content yields `0.0` — a defined outcome, not an error.
pub fn parse_display_price(price: &str) -> f64 {
    let numeric: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match numeric.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::debug!(price, "display price has no numeric content, using 0");
            0.0
        }
    }
}
