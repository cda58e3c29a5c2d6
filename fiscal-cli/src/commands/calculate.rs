use anyhow::{Context, Result, bail};

use fiscal_core::calculations::{aggregate, dual_rate, single_rate};
use fiscal_core::models::{DeclarationStatus, NewDeclaration, Period};
use fiscal_core::store::FiscalStore;
use fiscal_data::RestStore;
use fiscal_report::format::currency;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// User whose records to aggregate
    #[arg(long)]
    user: i64,

    /// Period to calculate, in YYYY-MM form
    #[arg(long)]
    period: String,

    /// Tax type whose rate to apply (single-rate mode)
    #[arg(long, required_unless_present = "dual", conflicts_with = "dual")]
    tax_type: Option<i64>,

    /// Compute the combined IR + IGV liability instead
    #[arg(long)]
    dual: bool,

    /// Save the result as a pending declaration (single-rate mode only)
    #[arg(long, requires = "tax_type")]
    save: bool,

    /// Save as an editable draft instead of pending
    #[arg(long, requires = "save")]
    draft: bool,
}

pub async fn exec(store: &RestStore, args: Args) -> Result<()> {
    let period = Period::parse(&args.period)?;

    let incomes = store.list_incomes().await.context("Failed to fetch incomes")?;
    let expenses = store.list_expenses().await.context("Failed to fetch expenses")?;
    let tax_types = store
        .list_tax_types()
        .await
        .context("Failed to fetch tax types")?;

    let total_income = aggregate(&incomes, args.user, period);
    let total_expenses = aggregate(&expenses, args.user, period);

    println!("Período {period} - usuario {}", args.user);
    println!("Ingresos: {}", currency(total_income));
    println!("Gastos: {}", currency(total_expenses));

    if args.dual {
        let result = dual_rate(total_income, total_expenses, &tax_types);
        println!("Base imponible: {}", currency(result.taxable_income));
        println!("IR: {}", currency(result.ir_tax));
        println!("IGV: {}", currency(result.igv_tax));
        println!("Impuesto total: {}", currency(result.total_tax));
        return Ok(());
    }

    // clap guarantees tax_type is present when --dual is absent
    let tax_type_id = match args.tax_type {
        Some(id) => id,
        None => bail!("--tax-type is required without --dual"),
    };
    let tax_type = tax_types
        .iter()
        .find(|t| t.id == tax_type_id)
        .with_context(|| format!("Tax type {tax_type_id} not found"))?;

    let Some(result) = single_rate(total_income, total_expenses, tax_type.rate) else {
        bail!(
            "Tax type '{}' has no positive rate configured; nothing to calculate",
            tax_type.name
        );
    };

    println!("Base imponible: {}", currency(result.taxable_income));
    println!(
        "Impuesto ({} al {}%): {}",
        tax_type.name,
        tax_type.rate * rust_decimal::Decimal::ONE_HUNDRED,
        currency(result.tax_amount)
    );

    if args.save {
        let status = if args.draft {
            DeclarationStatus::Draft
        } else {
            DeclarationStatus::Pending
        };
        let declaration = store
            .create_declaration(NewDeclaration {
                user_id: args.user,
                period,
                total_income,
                total_expenses,
                taxable_income: result.taxable_income,
                tax_amount: result.tax_amount,
                status,
                tax_type_id,
            })
            .await
            .context("Failed to save declaration")?;
        println!(
            "Declaración {} registrada ({}).",
            declaration.id,
            status.display_label().to_lowercase()
        );
    }

    Ok(())
}
