use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use fiscal_core::calculations::{DeclarationFilter, paginate, statistics};
use fiscal_core::models::{Period, TaxType};
use fiscal_core::store::FiscalStore;
use fiscal_data::RestStore;
use fiscal_report::format::currency;
use fiscal_report::{csv_filename, history_csv};

use super::parse_status;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Only declarations of this user
    #[arg(long)]
    user: Option<i64>,

    /// Only declarations with this status
    #[arg(long)]
    status: Option<String>,

    /// Only declarations for this period (YYYY-MM)
    #[arg(long)]
    period: Option<String>,

    /// Only declarations with this tax type id
    #[arg(long)]
    tax_type: Option<i64>,

    /// Free-text search over period, tax type name and status label
    #[arg(long)]
    search: Option<String>,

    /// Page to show (1-indexed, 10 entries per page)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Also export the filtered history as CSV
    #[arg(long)]
    csv: bool,

    /// Output path for the CSV (defaults to a timestamped file name)
    #[arg(long, requires = "csv")]
    output: Option<PathBuf>,
}

pub async fn exec(store: &RestStore, args: Args) -> Result<()> {
    let filter = DeclarationFilter {
        status: args.status.as_deref().map(parse_status).transpose()?,
        period: args.period.as_deref().map(Period::parse).transpose()?,
        tax_type_id: args.tax_type,
        search: args.search.clone(),
    };

    let mut declarations = store
        .list_declarations()
        .await
        .context("Failed to fetch declarations")?;
    let tax_types = store
        .list_tax_types()
        .await
        .context("Failed to fetch tax types")?;

    if let Some(user) = args.user {
        declarations.retain(|d| d.user_id == user);
    }
    let filtered = filter.apply(&declarations, &tax_types);
    let stats = statistics(&filtered);
    let page = paginate(&filtered, args.page);

    println!(
        "{:<8} {:<14} {:>12} {:>12} {:>14} {:>12} {:<12}",
        "Período", "Tipo", "Ingresos", "Gastos", "Base Imp.", "Impuesto", "Estado"
    );
    for d in &page.items {
        println!(
            "{:<8} {:<14} {:>12} {:>12} {:>14} {:>12} {:<12}",
            d.period.to_string(),
            tax_type_name(&tax_types, d.tax_type_id),
            currency(d.total_income),
            currency(d.total_expenses),
            currency(d.taxable_income),
            currency(d.tax_amount),
            d.status.display_label(),
        );
    }
    println!();
    println!(
        "Página {} de {} ({} declaraciones)",
        page.page, page.total_pages, page.total_items
    );
    println!("Impuestos pagados: {}", currency(stats.total_taxes_paid));
    println!("Impuesto promedio: {}", currency(stats.average_tax_amount));
    println!("Tasa efectiva: {}%", stats.effective_rate);
    println!("Completadas: {}%", stats.completed_percentage);

    if args.csv {
        let csv = history_csv(&filtered, &tax_types).context("Failed to render CSV")?;
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(csv_filename(Utc::now().timestamp_millis())));
        fs::write(&path, csv)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn tax_type_name(tax_types: &[TaxType], id: i64) -> String {
    tax_types
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Desconocido".to_string())
}
