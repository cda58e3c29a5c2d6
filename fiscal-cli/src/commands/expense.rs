use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

use fiscal_core::models::{ExpenseCategory, NewExpense, Period};
use fiscal_core::store::FiscalStore;
use fiscal_data::RestStore;
use fiscal_report::format::currency;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Register an expense entry
    Add(AddArgs),
    /// List expense entries
    List(ListArgs),
    /// Delete an expense entry
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Owning user id
    #[arg(long)]
    user: i64,

    /// Category; inferred from the description when omitted
    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    amount: Decimal,

    /// Period the expense belongs to (YYYY-MM)
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

fn parse_category(s: &str) -> Result<ExpenseCategory> {
    let all = [
        ExpenseCategory::Educacion,
        ExpenseCategory::Salud,
        ExpenseCategory::Alimentacion,
        ExpenseCategory::Transporte,
        ExpenseCategory::Vivienda,
        ExpenseCategory::Vestimenta,
        ExpenseCategory::Otros,
    ];
    match all.iter().find(|c| c.as_str() == s) {
        Some(category) => Ok(*category),
        None => bail!("unknown category '{s}'"),
    }
}

pub async fn exec(store: &RestStore, cmd: Command) -> Result<()> {
    match cmd {
        Command::Add(args) => {
            let period = Period::parse(&args.period)?;
            let expense = match args.category.as_deref() {
                Some(s) => NewExpense {
                    user_id: args.user,
                    category: parse_category(s)?,
                    amount: args.amount,
                    period,
                    description: args.description,
                },
                None => NewExpense::with_inferred_category(
                    args.user,
                    args.amount,
                    period,
                    args.description,
                ),
            };
            expense.validate()?;

            let created = store
                .create_expense(expense)
                .await
                .context("Failed to create expense")?;
            println!(
                "Gasto {} registrado (categoría {}).",
                created.id,
                created.category.as_str()
            );
        }
        Command::List(args) => {
            let period = args.period.as_deref().map(Period::parse).transpose()?;
            let expenses = store.list_expenses().await.context("Failed to fetch expenses")?;

            for expense in expenses.iter().filter(|e| {
                args.user.is_none_or(|u| e.user_id == u)
                    && period.is_none_or(|p| e.period == p)
            }) {
                println!(
                    "{:>4}  {}  {:<14} {:>12}  {}",
                    expense.id,
                    expense.period,
                    expense.category.as_str(),
                    currency(expense.amount),
                    expense.description,
                );
            }
        }
        Command::Delete(args) => {
            store
                .delete_expense(args.id)
                .await
                .with_context(|| format!("Failed to delete expense {}", args.id))?;
            println!("Gasto {} eliminado.", args.id);
        }
    }
    Ok(())
}
