//! CSV export of declaration history.
//!
//! One row per declaration, every value quoted, numbers as plain 2dp
//! text. Tax types are resolved to names here so the file is readable
//! without the reference table.

use std::io::Write;

use ::csv::{QuoteStyle, WriterBuilder};

use fiscal_core::models::{Declaration, TaxType};

use crate::RenderError;
use crate::format::plain;

const HEADERS: [&str; 7] = [
    "Período",
    "Tipo Impuesto",
    "Ingresos",
    "Gastos",
    "Base Imponible",
    "Impuesto",
    "Estado",
];

/// File name for a history export, e.g.
/// `historial-declaraciones-1738400000000.csv`.
pub fn csv_filename(timestamp_millis: i64) -> String {
    format!("historial-declaraciones-{timestamp_millis}.csv")
}

/// Writes the declaration history as CSV to `writer`.
pub fn write_history_csv<W: Write>(
    declarations: &[Declaration],
    tax_types: &[TaxType],
    writer: W,
) -> Result<(), RenderError> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    out.write_record(HEADERS)?;
    for declaration in declarations {
        out.write_record([
            declaration.period.to_string(),
            tax_type_name(tax_types, declaration.tax_type_id),
            plain(declaration.total_income),
            plain(declaration.total_expenses),
            plain(declaration.taxable_income),
            plain(declaration.tax_amount),
            declaration.status.display_label().to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the declaration history to a CSV string. Built fully in
/// memory, so a failure produces no partial output.
pub fn history_csv(
    declarations: &[Declaration],
    tax_types: &[TaxType],
) -> Result<String, RenderError> {
    let mut bytes = Vec::new();
    write_history_csv(declarations, tax_types, &mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn tax_type_name(tax_types: &[TaxType], tax_type_id: i64) -> String {
    tax_types
        .iter()
        .find(|t| t.id == tax_type_id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Desconocido".to_string())
}
