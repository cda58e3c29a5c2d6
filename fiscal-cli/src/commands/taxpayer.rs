use anyhow::{Context, Result, bail};

use fiscal_core::models::{DocumentType, NewUser, UserRole};
use fiscal_core::store::FiscalStore;
use fiscal_data::RestStore;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List registered users
    List,
    /// Register a user account
    Add(AddArgs),
    /// Delete a user account
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    username: String,

    #[arg(long)]
    password: String,

    /// Full name
    #[arg(long)]
    name: String,

    /// Account role: admin or taxpayer
    #[arg(long, default_value = "taxpayer")]
    role: String,

    /// Identity document kind: DNI or RUC
    #[arg(long)]
    document_type: String,

    #[arg(long)]
    document_number: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    address: String,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    #[arg(long)]
    id: i64,
}

fn parse_role(s: &str) -> Result<UserRole> {
    match s {
        "admin" => Ok(UserRole::Admin),
        "taxpayer" => Ok(UserRole::Taxpayer),
        other => bail!("unknown role '{other}' (expected admin or taxpayer)"),
    }
}

fn parse_document_type(s: &str) -> Result<DocumentType> {
    match s {
        "DNI" => Ok(DocumentType::Dni),
        "RUC" => Ok(DocumentType::Ruc),
        other => bail!("unknown document type '{other}' (expected DNI or RUC)"),
    }
}

pub async fn exec(store: &RestStore, cmd: Command) -> Result<()> {
    match cmd {
        Command::List => {
            let users = store.list_users().await.context("Failed to fetch users")?;
            for user in &users {
                println!(
                    "{:>4}  {:<16} {:<10} {} {}  {}",
                    user.id,
                    user.username,
                    user.role.as_str(),
                    user.document_type.as_str(),
                    user.document_number,
                    user.name,
                );
            }
        }
        Command::Add(args) => {
            let user = NewUser {
                username: args.username,
                password: args.password,
                name: args.name,
                role: parse_role(&args.role)?,
                document_type: parse_document_type(&args.document_type)?,
                document_number: args.document_number,
                email: args.email,
                address: args.address,
            };

            let created = store.create_user(user).await.context("Failed to create user")?;
            println!("Usuario {} registrado.", created.id);
        }
        Command::Delete(args) => {
            store
                .delete_user(args.id)
                .await
                .with_context(|| format!("Failed to delete user {}", args.id))?;
            println!("Usuario {} eliminado.", args.id);
        }
    }
    Ok(())
}
