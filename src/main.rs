mod config;
mod db;
mod models;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Cli;
use crate::db::Database;
use crate::models::Client;

const NEW_LOGIN: &str = "Sharikov_2025";

fn demo_client() -> Client {
    Client::new(
        "Sharikov Poligraf Poligrafovich",
        "Sharikov_PP",
        "20250811",
        "Sharikov_PP@yandex.ru",
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the demo output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = config::init(&cli)?;

    let mut db = match Database::new(&config).await {
        Ok(db) => db,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    // The first failing step is printed and ends the sequence
    if let Err(err) = run_demo(&mut db).await {
        println!("{}", err);
        if !err.is_not_found() {
            warn!("demo stopped before the final read");
        }
    }

    db.close().await?;

    Ok(())
}

/// Insert, read, update, read, delete, then read once more.
/// The last read is expected to fail with a not-found error.
async fn run_demo(db: &mut Database) -> db::Result<()> {
    let id = db.insert_client(&demo_client()).await?;

    let client = db.select_client(id).await?;
    println!("{}", client);

    db.update_client_login(NEW_LOGIN, id).await?;

    let client = db.select_client(id).await?;
    println!("{}", client);

    db.delete_client(id).await?;

    db.select_client(id).await?;

    Ok(())
}
