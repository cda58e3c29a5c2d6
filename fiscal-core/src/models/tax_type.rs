use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de::id_from_string_or_number;

/// Admin-managed reference data: a named tax with its rate as a decimal
/// fraction (0.30 means 30%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxType {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub rate: Decimal,
}

/// For creating new tax types (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaxType {
    pub name: String,
    pub description: String,
    pub rate: Decimal,
}

/// Finds the rate of the first tax type whose name contains `name_part`
/// (case-insensitive). `None` when no name matches.
pub fn rate_for(tax_types: &[TaxType], name_part: &str) -> Option<Decimal> {
    let needle = name_part.to_lowercase();
    tax_types
        .iter()
        .find(|t| t.name.to_lowercase().contains(&needle))
        .map(|t| t.rate)
}
