//! Pure computation layer: aggregation, tax math, classification and
//! period report building over already-fetched records.
//!
//! Nothing in this module performs I/O. Callers fetch the relevant
//! collections first and pass complete slices in; results are plain
//! values, rebuilt from scratch whenever inputs change.

pub mod aggregate;
pub mod classify;
pub mod common;
pub mod report;
pub mod tax;

pub use aggregate::{AmountRecord, aggregate};
pub use classify::{
    DeclarationFilter, PAGE_SIZE, Page, StatusBuckets, Statistics, classify, paginate, recent,
    statistics,
};
pub use report::{PeriodReport, build_report};
pub use tax::{
    DEFAULT_IGV_RATE, DEFAULT_IR_RATE, DualRateAssessment, TaxAssessment, dual_rate, single_rate,
};
