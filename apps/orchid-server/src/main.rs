//! orchid-server - hosts the tiers module over HTTP
//!
//! Startup order: CLI → configuration → logging → database → migrations →
//! module init → serve.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tiers::TiersModule;
use tracing::info;

mod config;
mod db;
mod logging;
mod server;

use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "orchid-server", version, about = "Orchid tiers server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "ORCHID_CONFIG")]
    config: Option<PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Apply migrations, then serve (default)
    Run,
    /// Apply pending migrations and exit
    Migrate,
    /// Revert the last migration and exit
    Rollback,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&cfg)?);
        return Ok(());
    }

    logging::init(&cfg.logging);
    info!(
        "Starting orchid-server v{} (database: {})",
        env!("CARGO_PKG_VERSION"),
        db::redact(&cfg.database.url)
    );

    let conn = db::connect(&cfg.database).await?;
    let tiers = TiersModule::default();

    match cli.command.unwrap_or(Command::Run) {
        Command::Migrate => tiers.migrate(&conn).await,
        Command::Rollback => tiers.rollback(&conn).await,
        Command::Run => {
            tiers.migrate(&conn).await?;
            tiers
                .init(cfg.tiers.clone(), Arc::new(conn))
                .context("Failed to initialize tiers module")?;
            info!(
                check_number_before_write = tiers.config().check_number_before_write,
                "Tiers module ready"
            );

            let router = server::build_router(&tiers, &cfg.server)?;
            server::serve(router, &cfg.server).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_flags() {
        let cli = Cli::parse_from(["orchid-server", "--config", "x.yaml", "migrate"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
        assert_eq!(cli.command, Some(Command::Migrate));

        let cli = Cli::parse_from(["orchid-server", "--print-config"]);
        assert!(cli.print_config);
        assert_eq!(cli.command, None);
    }
}
