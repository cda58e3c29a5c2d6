use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use fiscal_core::calculations::build_report;
use fiscal_core::models::Period;
use fiscal_core::store::FiscalStore;
use fiscal_data::RestStore;
use fiscal_report::format::currency;
use fiscal_report::{pdf_filename, render_pdf};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Period to report on, in YYYY-MM form
    #[arg(long)]
    period: String,

    /// Also write the report as a PDF file
    #[arg(long)]
    pdf: bool,

    /// Output path for the PDF (defaults to reporte_fiscal_{period}.pdf)
    #[arg(long, requires = "pdf")]
    output: Option<PathBuf>,
}

pub async fn exec(store: &RestStore, args: Args) -> Result<()> {
    let period = Period::parse(&args.period)?;

    let declarations = store
        .list_declarations()
        .await
        .context("Failed to fetch declarations")?;

    let report = build_report(&declarations, period);

    println!("Período {}:", report.period);
    println!("- Total declaraciones: {}", report.total_declarations);
    println!("- Ingresos totales: {}", currency(report.total_income));
    println!("- Impuestos recaudados: {}", currency(report.total_tax_collected));
    println!("- Pendientes: {}", report.pending);
    println!("- Completadas: {}", report.completed);
    if report.processing > 0 {
        println!("- En proceso: {}", report.processing);
    }

    if args.pdf {
        let bytes = render_pdf(&report, Utc::now()).context("Failed to render PDF")?;
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(pdf_filename(&report)));
        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
