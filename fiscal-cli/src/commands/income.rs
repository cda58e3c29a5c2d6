use anyhow::{Context, Result};
use rust_decimal::Decimal;

use fiscal_core::models::{NewIncome, Period};
use fiscal_core::store::FiscalStore;
use fiscal_data::RestStore;
use fiscal_report::format::currency;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Register an income entry
    Add(AddArgs),
    /// List income entries
    List(ListArgs),
    /// Delete an income entry
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Owning user id
    #[arg(long)]
    user: i64,

    /// Income category, e.g. "Sueldo" or "Honorarios"
    #[arg(long)]
    source: String,

    #[arg(long)]
    amount: Decimal,

    /// Period the income belongs to (YYYY-MM)
    #[arg(long)]
    period: String,

    #[arg(long)]
    description: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only entries of this user
    #[arg(long)]
    user: Option<i64>,

    /// Only entries of this period (YYYY-MM)
    #[arg(long)]
    period: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    #[arg(long)]
    id: i64,
}

pub async fn exec(store: &RestStore, cmd: Command) -> Result<()> {
    match cmd {
        Command::Add(args) => {
            let income = NewIncome {
                user_id: args.user,
                source: args.source,
                amount: args.amount,
                period: Period::parse(&args.period)?,
                description: args.description,
            };
            income.validate()?;

            let created = store
                .create_income(income)
                .await
                .context("Failed to create income")?;
            println!("Ingreso {} registrado.", created.id);
        }
        Command::List(args) => {
            let period = args.period.as_deref().map(Period::parse).transpose()?;
            let incomes = store.list_incomes().await.context("Failed to fetch incomes")?;

            for income in incomes.iter().filter(|i| {
                args.user.is_none_or(|u| i.user_id == u)
                    && period.is_none_or(|p| i.period == p)
            }) {
                println!(
                    "{:>4}  {}  {:<16} {:>12}  {}",
                    income.id,
                    income.period,
                    income.source,
                    currency(income.amount),
                    income.description,
                );
            }
        }
        Command::Delete(args) => {
            store
                .delete_income(args.id)
                .await
                .with_context(|| format!("Failed to delete income {}", args.id))?;
            println!("Ingreso {} eliminado.", args.id);
        }
    }
    Ok(())
}
