//! Tax calculators.
//!
//! Two named modes exist and they are deliberately not merged:
//!
//! - [`single_rate`] applies one configured rate to taxable income, and
//!   refuses to produce a result when no positive rate is available.
//! - [`dual_rate`] computes the IR (income tax) and IGV (consumption tax)
//!   components, falling back to the statutory default rates when the
//!   tax-type table does not carry them. The defaults exist only here.
//!
//! In both modes `taxable_income = max(0, income - expenses)`; IGV applies
//! to gross income, not taxable income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::{TaxType, rate_for};

/// Fallback IR rate (30%) when no tax type named like "IR" exists.
pub const DEFAULT_IR_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Fallback IGV rate (18%) when no tax type named like "IGV" exists.
pub const DEFAULT_IGV_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Result of a single-rate calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,
}

/// Result of a dual-rate (IR + IGV) calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualRateAssessment {
    pub taxable_income: Decimal,
    pub ir_tax: Decimal,
    pub igv_tax: Decimal,
    pub total_tax: Decimal,
}

/// Income after deducting expenses, floored at zero. Negative inputs are
/// tolerated; the floor applies regardless.
fn taxable_income(total_income: Decimal, total_expenses: Decimal) -> Decimal {
    (total_income - total_expenses).max(Decimal::ZERO)
}

/// Applies one flat rate to taxable income.
///
/// Returns `None` when `rate` is not positive: the caller must treat that
/// as incomplete input (no rate configured yet), not as zero tax owed.
pub fn single_rate(
    total_income: Decimal,
    total_expenses: Decimal,
    rate: Decimal,
) -> Option<TaxAssessment> {
    if rate <= Decimal::ZERO {
        return None;
    }

    let taxable = round_half_up(taxable_income(total_income, total_expenses));
    Some(TaxAssessment {
        taxable_income: taxable,
        tax_amount: round_half_up(taxable * rate),
    })
}

/// Computes the combined IR and IGV liability for one period.
///
/// IR applies to taxable income; IGV applies to gross income. Rates come
/// from the tax-type table by name lookup, with [`DEFAULT_IR_RATE`] and
/// [`DEFAULT_IGV_RATE`] as fallbacks.
pub fn dual_rate(
    total_income: Decimal,
    total_expenses: Decimal,
    tax_types: &[TaxType],
) -> DualRateAssessment {
    let ir_rate = rate_for(tax_types, "IR").unwrap_or(DEFAULT_IR_RATE);
    let igv_rate = rate_for(tax_types, "IGV").unwrap_or(DEFAULT_IGV_RATE);

    let taxable = round_half_up(taxable_income(total_income, total_expenses));
    let ir_tax = round_half_up(taxable * ir_rate);
    let igv_tax = round_half_up(total_income * igv_rate);

    DualRateAssessment {
        taxable_income: taxable,
        ir_tax,
        igv_tax,
        total_tax: ir_tax + igv_tax,
    }
}
