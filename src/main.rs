use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lectern::app::AppContext;
use lectern::cli::{commands, Cli, Commands};
use lectern::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let policy = cli.on_duplicate.unwrap_or(config.store.on_duplicate);
    let ctx = AppContext::new(cli.db, config)?;

    match cli.command {
        Commands::Fetch => {
            commands::fetch(&ctx, policy).await?;
        }
        Commands::Clear => {
            commands::clear(&ctx)?;
        }
        Commands::List => {
            commands::list(&ctx)?;
        }
        Commands::Stats => {
            commands::print_stats(&ctx)?;
        }
        Commands::Chapter { path } => {
            commands::chapter(&path)?;
        }
        Commands::Report {
            url,
            author,
            out,
            open,
        } => {
            commands::build_report(&ctx, &url, author, &out, open).await?;
        }
        Commands::Tui => {
            lectern::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
