use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de::id_from_string_or_number;
use super::income::ValidationError;
use super::period::Period;

/// Deductible expense categories used on the declaration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Educación")]
    Educacion,
    Salud,
    #[serde(rename = "Alimentación")]
    Alimentacion,
    Transporte,
    Vivienda,
    Vestimenta,
    Otros,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Educacion => "Educación",
            Self::Salud => "Salud",
            Self::Alimentacion => "Alimentación",
            Self::Transporte => "Transporte",
            Self::Vivienda => "Vivienda",
            Self::Vestimenta => "Vestimenta",
            Self::Otros => "Otros",
        }
    }

    /// Suggests a category from free-text description keywords.
    ///
    /// Matching is case-insensitive substring; the first category with a
    /// matching keyword wins. Unmatched descriptions fall back to `Otros`.
    pub fn infer(description: &str) -> Self {
        const RULES: [(ExpenseCategory, &[&str]); 6] = [
            (
                ExpenseCategory::Educacion,
                &["matrícula", "colegio", "universidad", "curso", "libro", "taller"],
            ),
            (
                ExpenseCategory::Salud,
                &["clínica", "gym", "médico", "farmacia", "dentista", "psicología"],
            ),
            (
                ExpenseCategory::Alimentacion,
                &["supermercado", "comida", "restaurante", "alimento", "mercado", "bebidas"],
            ),
            (
                ExpenseCategory::Transporte,
                &["pasaje", "gasolina", "taxi", "uber", "metropolitano", "peaje"],
            ),
            (
                ExpenseCategory::Vivienda,
                &["alquiler", "hipoteca", "luz", "agua", "internet", "mantenimiento"],
            ),
            (
                ExpenseCategory::Vestimenta,
                &["ropa", "zapato", "pantalon", "camisa", "reloj"],
            ),
        ];

        let text = description.to_lowercase();
        for (category, keywords) in RULES {
            if keywords.iter().any(|k| text.contains(k)) {
                return category;
            }
        }
        Self::Otros
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: i64,
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub user_id: i64,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub period: Period,
    pub description: String,
}

/// For creating new expense entries (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub user_id: i64,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub period: Period,
    pub description: String,
}

impl NewExpense {
    /// Builds an entry, inferring the category from the description when the
    /// caller did not pick one.
    pub fn with_inferred_category(
        user_id: i64,
        amount: Decimal,
        period: Period,
        description: String,
    ) -> Self {
        let category = ExpenseCategory::infer(&description);
        Self { user_id, category, amount, period, description }
    }

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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn infer_matches_education_keywords() {
        assert_eq!(
            ExpenseCategory::infer("Matrícula universitaria 2025"),
            ExpenseCategory::Educacion
        );
    }

    #[test]
    fn infer_matches_transport_keywords() {
        assert_eq!(ExpenseCategory::infer("Gasolina del mes"), ExpenseCategory::Transporte);
    }

    #[test]
    fn infer_matches_housing_keywords() {
        assert_eq!(ExpenseCategory::infer("Recibo de luz"), ExpenseCategory::Vivienda);
    }

    #[test]
    fn infer_is_case_insensitive() {
        assert_eq!(ExpenseCategory::infer("FARMACIA Inkafarma"), ExpenseCategory::Salud);
    }

    #[test]
    fn infer_falls_back_to_otros() {
        assert_eq!(ExpenseCategory::infer("Donación benéfica"), ExpenseCategory::Otros);
    }

    #[test]
    fn infer_handles_empty_description() {
        assert_eq!(ExpenseCategory::infer(""), ExpenseCategory::Otros);
    }

    #[test]
    fn with_inferred_category_uses_description() {
        let expense = NewExpense::with_inferred_category(
            1,
            dec!(350.00),
            Period::parse("2025-01").unwrap(),
            "Supermercado semanal".to_string(),
        );

        assert_eq!(expense.category, ExpenseCategory::Alimentacion);
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let expense = NewExpense {
            user_id: 1,
            category: ExpenseCategory::Otros,
            amount: dec!(-5),
            period: Period::parse("2025-01").unwrap(),
            description: "x".to_string(),
        };

        assert_eq!(expense.validate(), Err(ValidationError::NegativeAmount(dec!(-5))));
    }

    #[test]
    fn category_serializes_with_accents() {
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::Educacion).unwrap(),
            "\"Educación\""
        );
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::Alimentacion).unwrap(),
            "\"Alimentación\""
        );
    }

    #[test]
    fn deserializes_store_shape() {
        let json = r#"{
            "id": "4",
            "userId": 2,
            "category": "Salud",
            "amount": 120.00,
            "period": "2025-03",
            "description": "Consulta dental"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.id, 4);
        assert_eq!(expense.category, ExpenseCategory::Salud);
        assert_eq!(expense.amount, dec!(120.00));
    }
}
