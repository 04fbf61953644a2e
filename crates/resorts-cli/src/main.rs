//! Resorts CLI - manage the ski resort collection from the terminal
//!
//! Every command drives the same list controller a graphical client would:
//! load the collection, edit the draft, submit, reload.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::{build_draft, run_add};
use crate::commands::delete::run_delete;
use crate::commands::edit::{run_edit, EditOverrides};
use crate::commands::list::run_list;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "resorts_cli=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => run_list(json, cli.api_url).await?,
        Commands::Add {
            name,
            location,
            slopes,
            difficulty,
        } => {
            let draft = build_draft(name, location, slopes, difficulty);
            run_add(draft, cli.api_url).await?;
        }
        Commands::Edit {
            id,
            name,
            location,
            slopes,
            difficulty,
        } => {
            let overrides = EditOverrides {
                name,
                location,
                slopes,
                difficulty,
            };
            run_edit(&id, overrides, cli.api_url).await?;
        }
        Commands::Delete { id, yes } => run_delete(&id, yes, cli.api_url).await?,
    }

    Ok(())
}
