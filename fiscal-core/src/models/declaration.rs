use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de::id_from_string_or_number;
use super::period::Period;

/// Lifecycle state of a declaration. Unknown values coming from the store
/// fail deserialization instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStatus {
    Pending,
    Completed,
    Draft,
    Processing,
}

impl DeclarationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Draft => "draft",
            Self::Processing => "processing",
        }
    }

    /// Display label shown in reports and exports.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Completed => "Completado",
            Self::Pending => "Pendiente",
            Self::Draft => "Borrador",
            Self::Processing => "En Proceso",
        }
    }

    /// Whether a declaration may move from this status to `next`.
    ///
    /// Completion is terminal. A pending declaration can be reopened as a
    /// draft for editing and a draft resubmitted as pending. `processing`
    /// is assigned by the store only, so nothing transitions into it here.
    pub fn can_transition_to(&self, next: DeclarationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, DeclarationStatus::Completed)
                | (Self::Pending, DeclarationStatus::Draft)
                | (Self::Draft, DeclarationStatus::Pending)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: i64,
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub user_id: i64,
    pub period: Period,
    pub total_income: Decimal,
    pub total_expenses: Decimal,

    // Derived values, recomputed by the tax calculator whenever the
    // income/expense/rate inputs change. Never edited directly.
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,

    pub status: DeclarationStatus,
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub tax_type_id: i64,
}

/// For creating new declarations (no id or timestamps yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeclaration {
    pub user_id: i64,
    pub period: Period,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,
    pub status: DeclarationStatus,
    pub tax_type_id: i64,
}
