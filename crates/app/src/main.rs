mod args;
mod commands;
mod db;
mod logging;

use std::io;

use anyhow::Context;
use clap::Parser;
use services::{AppServices, Clock};

use crate::args::{Cli, Command};
use crate::db::{normalize_sqlite_url, prepare_sqlite_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbosity());

    let db_url = normalize_sqlite_url(&cli.db);
    prepare_sqlite_file(&db_url)?;
    tracing::debug!(%db_url, "opening response cache");

    let services = AppServices::new_sqlite(&db_url, Clock::system())
        .await
        .with_context(|| format!("opening {db_url}"))?;
    let svc = services.milestones();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Status { json } => commands::status(&svc, *json, &mut out).await,
        Command::Questions(args) => commands::questions(&svc, args, &mut out).await,
        Command::Answer(args) => commands::answer(&svc, args, &mut out).await,
        Command::Walk(args) => {
            let mut input = io::stdin().lock();
            commands::walk(&svc, args, &mut input, &mut out).await
        }
        Command::Clear => commands::clear(&svc, &mut out).await,
    }
}
