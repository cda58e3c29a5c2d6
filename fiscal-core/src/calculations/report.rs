//! Period report building: one immutable summary of a period's
//! declarations, ready for the renderer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::classify::{Statistics, classify, statistics};
use crate::models::{Declaration, Period};

/// Snapshot of one period's declarations. Built on demand and never
/// mutated; new data means building a fresh report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period: Period,
    pub total_declarations: usize,
    pub total_income: Decimal,
    pub total_tax_collected: Decimal,
    pub pending: usize,
    pub completed: usize,
    pub processing: usize,
    /// The contributing declarations, in their input order.
    pub declarations: Vec<Declaration>,
}

impl PeriodReport {
    /// Summary statistics over the report's declarations.
    pub fn statistics(&self) -> Statistics {
        statistics(&self.declarations)
    }
}

/// Builds the report for `period` from a full declaration list.
///
/// A period with no declarations yields an all-zero report with an empty
/// list; that is a legitimate "no activity" result, not an error.
pub fn build_report(declarations: &[Declaration], period: Period) -> PeriodReport {
    let in_period: Vec<Declaration> = declarations
        .iter()
        .filter(|d| d.period == period)
        .cloned()
        .collect();

    let total_income = in_period.iter().map(|d| d.total_income).sum();
    let total_tax_collected = in_period.iter().map(|d| d.tax_amount).sum();
    let buckets = classify(&in_period);

    debug!(%period, declarations = in_period.len(), "built period report");

    PeriodReport {
        period,
        total_declarations: in_period.len(),
        total_income,
        total_tax_collected,
        pending: buckets.pending.len(),
        completed: buckets.completed.len(),
        processing: buckets.processing.len(),
        declarations: in_period,
    }
}
