use anyhow::{Context, Result};
use rust_decimal::Decimal;

use fiscal_core::models::NewTaxType;
use fiscal_core::store::FiscalStore;
use fiscal_data::RestStore;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List configured tax types
    List,
    /// Register a tax type
    Add(AddArgs),
    /// Change a tax type's rate
    SetRate(SetRateArgs),
    /// Delete a tax type
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Name, e.g. "IR" or "IGV"
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Rate as a decimal fraction (0.30 means 30%)
    #[arg(long)]
    rate: Decimal,
}

#[derive(clap::Args, Debug)]
pub struct SetRateArgs {
    #[arg(long)]
    id: i64,

    /// New rate as a decimal fraction
    #[arg(long)]
    rate: Decimal,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    #[arg(long)]
    id: i64,
}

pub async fn exec(store: &RestStore, cmd: Command) -> Result<()> {
    match cmd {
        Command::List => {
            let tax_types = store.list_tax_types().await.context("Failed to fetch tax types")?;
            for tax_type in &tax_types {
                println!(
                    "{:>4}  {:<12} {:>6}%  {}",
                    tax_type.id,
                    tax_type.name,
                    tax_type.rate * Decimal::ONE_HUNDRED,
                    tax_type.description,
                );
            }
        }
        Command::Add(args) => {
            let created = store
                .create_tax_type(NewTaxType {
                    name: args.name,
                    description: args.description,
                    rate: args.rate,
                })
                .await
                .context("Failed to create tax type")?;
            println!("Tipo de impuesto {} registrado.", created.id);
        }
        Command::SetRate(args) => {
            let mut tax_type = store
                .list_tax_types()
                .await
                .context("Failed to fetch tax types")?
                .into_iter()
                .find(|t| t.id == args.id)
                .with_context(|| format!("Tax type {} not found", args.id))?;

            tax_type.rate = args.rate;
            store
                .update_tax_type(&tax_type)
                .await
                .with_context(|| format!("Failed to update tax type {}", args.id))?;
            println!("Tasa de {} actualizada a {}.", tax_type.name, args.rate);
        }
        Command::Delete(args) => {
            store
                .delete_tax_type(args.id)
                .await
                .with_context(|| format!("Failed to delete tax type {}", args.id))?;
            println!("Tipo de impuesto {} eliminado.", args.id);
        }
    }
    Ok(())
}
