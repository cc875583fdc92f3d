// duemap: browse outstanding Due tasks across an Asana workspace.
// A persisted key map spares the full workspace scan on every run.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod asana;
mod cache;
mod commands;
mod config;
mod error;
mod gateway;

use asana::AsanaClient;
use config::Config;

#[derive(Parser)]
#[command(name = "duemap")]
#[command(about = "Browse outstanding Due tasks across an Asana workspace", long_about = None)]
#[command(version)]
struct Cli {
    /// Workspace gid to enumerate (defaults to $ASANA_WORKSPACE)
    #[arg(long, global = true)]
    workspace: Option<String>,

    /// Due map location (defaults to the platform cache directory)
    #[arg(long, global = true)]
    cache_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cached due-task keys
    Due,

    /// Show the full record of the due task cached under a key
    Details {
        /// Project key, e.g. 06_11
        key: String,
    },

    /// List every task in a project
    Tasks {
        /// Project name, e.g. 06_11
        project: String,
    },

    /// List the workspace's projects
    Projects,

    /// Rescan the workspace and rewrite the due map
    Rebuild,

    /// Delete the due map so the next run rebuilds it
    Invalidate,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("duemap=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Invalidation is purely local; it must work without a credential.
    if matches!(&cli.command, Commands::Invalidate) {
        let cache_file = config::resolve_cache_file(cli.cache_file)?;
        commands::invalidate::execute(&cache_file)?;
        return Ok(());
    }

    let config = Config::resolve(cli.workspace, cli.cache_file)?;
    let client = AsanaClient::new(&config.token)?;

    match cli.command {
        Commands::Due => commands::due::execute(&client, &config).await?,
        Commands::Details { key } => commands::details::execute(&client, &config, &key).await?,
        Commands::Tasks { project } => commands::tasks::execute(&client, &config, &project).await?,
        Commands::Projects => commands::projects::execute(&client, &config).await?,
        Commands::Rebuild => commands::rebuild::execute(&client, &config).await?,
        Commands::Invalidate => unreachable!(),
    }

    Ok(())
}
