use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::de::id_from_string_or_number;
use super::period::Period;

/// Entry-time validation failures for income and expense records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("description must not be empty")]
    EmptyDescription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: i64,
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub user_id: i64,
    /// Free-text income category ("Sueldo", "Honorarios", ...).
    pub source: String,
    pub amount: Decimal,
    pub period: Period,
    pub description: String,
}

/// For creating new income entries (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub user_id: i64,
    pub source: String,
    pub amount: Decimal,
    pub period: Period,
    pub description: String,
}

impl NewIncome {
    /// Checks the entry before it is sent to the store. Amounts are
    /// validated non-negative here so the aggregation stage can assume it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(self.amount));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}
