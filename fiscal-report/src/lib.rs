//! Document rendering for period reports.
//!
//! Turns a [`fiscal_core::calculations::PeriodReport`] into PDF bytes or
//! CSV text. Rendering is a pure transform over already-built report data
//! and produces complete in-memory documents: a failure never leaves a
//! partially written artifact behind.

use thiserror::Error;

pub mod csv;
pub mod format;
pub mod pdf;

pub use csv::{csv_filename, history_csv, write_history_csv};
pub use pdf::{pdf_filename, render_pdf};

/// Failures of the document production step, kept distinct from data
/// errors: a report that built fine can still fail to render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("report generation failed: {0}")]
    Pdf(String),

    #[error("csv export failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
