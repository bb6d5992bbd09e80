use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nowpage::app::AppContext;
use nowpage::cli::{commands, Cli, Commands};
use nowpage::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON document
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            source,
            output,
            compact,
        } => {
            let config = Config::load(cli.config.as_deref())?.with_env();
            let ctx = AppContext::new(&config)?;
            commands::fetch(&ctx, source, output.as_deref(), compact).await?;
        }
        Commands::Init { force } => {
            commands::init(cli.config.as_deref(), force)?;
        }
    }

    Ok(())
}
