use anyhow::{Context, Result, bail};

use fiscal_core::store::FiscalStore;
use fiscal_data::{RestStore, Session};

#[derive(clap::Args, Debug)]
pub struct Args {
    #[arg(long)]
    username: String,

    #[arg(long)]
    password: String,
}

/// Checks credentials against the store's user list and reports the
/// resulting session. Exits non-zero on a mismatch.
pub async fn exec(store: &RestStore, args: Args) -> Result<()> {
    let users = store.list_users().await.context("Failed to fetch users")?;

    let Some(session) = Session::authenticate(&users, &args.username, &args.password) else {
        bail!("Invalid username or password");
    };

    println!(
        "Sesión iniciada: usuario {} ({})",
        session.user_id,
        session.role.as_str()
    );
    Ok(())
}
