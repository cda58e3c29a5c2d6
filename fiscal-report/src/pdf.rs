//! PDF rendering of a period report.
//!
//! A4 portrait layout: header with the period title and generation
//! timestamp, an executive summary, derived statistics, a detail table
//! with one row per declaration, and a footer. Long declaration lists
//! continue onto additional pages.

use std::io::BufWriter;

use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};
use rust_decimal::Decimal;
use tracing::debug;

use fiscal_core::calculations::PeriodReport;
use fiscal_core::calculations::common::round_half_up;

use crate::RenderError;
use crate::format::currency;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_LEFT: f32 = 20.0;
const BOTTOM_LIMIT: f32 = 30.0;

/// File name for a period's PDF report, e.g. `reporte_fiscal_2025_01.pdf`.
pub fn pdf_filename(report: &PeriodReport) -> String {
    format!("reporte_fiscal_{}.pdf", report.period.underscored())
}

/// Renders the report to PDF bytes.
///
/// The caller supplies `generated_at` so the footer timestamp is under
/// its control. The document is produced entirely in memory; on error
/// nothing is emitted.
pub fn render_pdf(report: &PeriodReport, generated_at: DateTime<Utc>) -> Result<Vec<u8>, RenderError> {
    let title = format!("Reporte Período {}", report.period.title());
    let (doc, page1, layer1) = PdfDocument::new(&title, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(page1).get_layer(layer1);
    let generated_line = format!("Generado el: {}", generated_at.format("%d/%m/%Y %H:%M UTC"));

    // Header
    layer.use_text(title.as_str(), 18.0, Mm(MARGIN_LEFT), Mm(277.0), &font_bold);
    layer.use_text(generated_line.as_str(), 10.0, Mm(MARGIN_LEFT), Mm(269.0), &font);

    let mut y = 255.0;

    // Executive summary
    layer.use_text("Resumen Ejecutivo", 13.0, Mm(MARGIN_LEFT), Mm(y), &font_bold);
    y -= 9.0;

    let mut summary = vec![
        ("Total declaraciones", report.total_declarations.to_string()),
        ("Ingresos totales", currency(report.total_income)),
        ("Impuestos recaudados", currency(report.total_tax_collected)),
        ("Completadas", report.completed.to_string()),
        ("Pendientes", report.pending.to_string()),
    ];
    if report.processing > 0 {
        summary.push(("En proceso", report.processing.to_string()));
    }
    for (label, value) in &summary {
        layer.use_text(*label, 10.0, Mm(MARGIN_LEFT), Mm(y), &font);
        layer.use_text(value.as_str(), 10.0, Mm(110.0), Mm(y), &font);
        y -= 6.0;
    }

    y -= 6.0;

    // Derived statistics
    layer.use_text("Estadísticas", 13.0, Mm(MARGIN_LEFT), Mm(y), &font_bold);
    y -= 9.0;

    let stats = report.statistics();
    let average_income = if report.total_declarations == 0 {
        Decimal::ZERO
    } else {
        round_half_up(report.total_income / Decimal::from(report.total_declarations))
    };
    let stat_lines = [
        ("Ingreso promedio", currency(average_income)),
        ("Impuesto promedio", currency(stats.average_tax_amount)),
        ("Tasa efectiva", format!("{}%", stats.effective_rate)),
        ("Porcentaje completado", format!("{}%", stats.completed_percentage)),
    ];
    for (label, value) in &stat_lines {
        layer.use_text(*label, 10.0, Mm(MARGIN_LEFT), Mm(y), &font);
        layer.use_text(value.as_str(), 10.0, Mm(110.0), Mm(y), &font);
        y -= 6.0;
    }

    y -= 6.0;

    // Detail table
    layer.use_text("Detalle de Declaraciones", 13.0, Mm(MARGIN_LEFT), Mm(y), &font_bold);
    y -= 9.0;
    draw_table_header(&layer, &font_bold, &mut y);

    let mut pages = 1;
    for declaration in &report.declarations {
        if y < BOTTOM_LIMIT {
            let (page, new_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
            pages += 1;
            y = 277.0;
            draw_table_header(&layer, &font_bold, &mut y);
        }

        layer.use_text(currency(declaration.total_income).as_str(), 9.0, Mm(MARGIN_LEFT), Mm(y), &font);
        layer.use_text(currency(declaration.total_expenses).as_str(), 9.0, Mm(55.0), Mm(y), &font);
        layer.use_text(currency(declaration.taxable_income).as_str(), 9.0, Mm(90.0), Mm(y), &font);
        layer.use_text(currency(declaration.tax_amount).as_str(), 9.0, Mm(125.0), Mm(y), &font);
        layer.use_text(declaration.status.display_label(), 9.0, Mm(160.0), Mm(y), &font);
        y -= 6.0;
    }

    // Footer on the last page
    layer.use_text(
        "Sistema de Gestión Fiscal - Reporte generado automáticamente",
        8.0,
        Mm(MARGIN_LEFT),
        Mm(15.0),
        &font,
    );
    layer.use_text(generated_line.as_str(), 8.0, Mm(150.0), Mm(15.0), &font);

    debug!(period = %report.period, pages, "rendered period report pdf");

    save_to_bytes(doc)
}

fn draw_table_header(layer: &PdfLayerReference, font_bold: &IndirectFontRef, y: &mut f32) {
    layer.use_text("Ingresos", 10.0, Mm(MARGIN_LEFT), Mm(*y), font_bold);
    layer.use_text("Gastos", 10.0, Mm(55.0), Mm(*y), font_bold);
    layer.use_text("Base Imponible", 10.0, Mm(90.0), Mm(*y), font_bold);
    layer.use_text("Impuesto", 10.0, Mm(125.0), Mm(*y), font_bold);
    layer.use_text("Estado", 10.0, Mm(160.0), Mm(*y), font_bold);

    *y -= 4.0;
    let rule = Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), Mm(*y)), false),
            (Point::new(Mm(190.0), Mm(*y)), false),
        ],
        is_closed: false,
    };
    layer.add_line(rule);
    *y -= 7.0;
}

fn save_to_bytes(doc: PdfDocumentReference) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use fiscal_core::calculations::build_report;
    use fiscal_core::models::{Declaration, DeclarationStatus, Period};

    use super::*;

    fn sample_declaration(id: i64, status: DeclarationStatus) -> Declaration {
        Declaration {
            id,
            user_id: 1,
            period: Period::parse("2025-01").unwrap(),
            total_income: dec!(5000.00),
            total_expenses: dec!(1200.00),
            taxable_income: dec!(3800.00),
            tax_amount: dec!(1140.00),
            status,
            tax_type_id: 1,
        }
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn pdf_starts_with_magic_bytes() {
        let declarations = vec![
            sample_declaration(1, DeclarationStatus::Completed),
            sample_declaration(2, DeclarationStatus::Pending),
        ];
        let report = build_report(&declarations, Period::parse("2025-01").unwrap());

        let bytes = render_pdf(&report, generated_at()).unwrap();

        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn empty_report_still_renders() {
        let report = build_report(&[], Period::parse("2099-12").unwrap());

        let bytes = render_pdf(&report, generated_at()).unwrap();

        assert!(!bytes.is_empty());
    }

    #[test]
    fn long_report_renders_without_truncation() {
        let declarations: Vec<Declaration> = (1..=80)
            .map(|id| sample_declaration(id, DeclarationStatus::Pending))
            .collect();
        let report = build_report(&declarations, Period::parse("2025-01").unwrap());

        let bytes = render_pdf(&report, generated_at()).unwrap();

        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn filename_uses_underscored_period() {
        let report = build_report(&[], Period::parse("2025-01").unwrap());

        assert_eq!(pdf_filename(&report), "reporte_fiscal_2025_01.pdf");
    }
}
