use anyhow::Result;
use clap::{Parser, Subcommand};
use fiscal_data::RestStore;

mod commands;
mod logging;

/// Tax declaration management over a REST data store.
#[derive(Parser, Debug)]
#[command(name = "fiscal")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the declaration data store
    #[arg(long, env = "FISCAL_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify credentials against the data store
    Login(commands::login::Args),
    /// Build the report for one period and optionally export it as PDF
    Report(commands::report::Args),
    /// Browse, filter and export the declaration history
    History(commands::history::Args),
    /// Compute taxable income and tax owed for a user and period
    Calculate(commands::calculate::Args),
    /// Manage income entries
    #[command(subcommand)]
    Income(commands::income::Command),
    /// Manage expense entries
    #[command(subcommand)]
    Expense(commands::expense::Command),
    /// Manage taxpayer accounts
    #[command(subcommand)]
    Taxpayer(commands::taxpayer::Command),
    /// Manage tax types
    #[command(subcommand)]
    TaxType(commands::tax_type::Command),
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    tracing::debug!(base_url = %cli.base_url, "using data store");
    let store = RestStore::new(&cli.base_url);

    match cli.command {
        Command::Login(args) => commands::login::exec(&store, args).await,
        Command::Report(args) => commands::report::exec(&store, args).await,
        Command::History(args) => commands::history::exec(&store, args).await,
        Command::Calculate(args) => commands::calculate::exec(&store, args).await,
        Command::Income(cmd) => commands::income::exec(&store, cmd).await,
        Command::Expense(cmd) => commands::expense::exec(&store, cmd).await,
        Command::Taxpayer(cmd) => commands::taxpayer::exec(&store, cmd).await,
        Command::TaxType(cmd) => commands::tax_type::exec(&store, cmd).await,
    }
}
