//! Inbound line items as returned by the items endpoint.

use serde::{Deserialize, Deserializer};

/// One line item of an inbound record
///
/// Decimal columns arrive either as JSON numbers or as strings such as
/// `"12.500"`, so `qty` and `weight` are kept as display text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemRow {
    pub item_code: String,
    #[serde(deserialize_with = "numeric_text")]
    pub qty: String,
    #[serde(default, deserialize_with = "optional_numeric_text")]
    pub weight: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemRow {
    /// Cells in column order: code, qty, weight, description
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.item_code.clone(),
            self.qty.clone(),
            self.weight.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn into_text(self) -> String {
        match self {
            Numeric::Number(n) => n.to_string(),
            Numeric::Text(s) => s,
        }
    }
}

fn numeric_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Numeric::deserialize(deserializer).map(Numeric::into_text)
}

fn optional_numeric_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Numeric>::deserialize(deserializer).map(|v| v.map(Numeric::into_text))
}
