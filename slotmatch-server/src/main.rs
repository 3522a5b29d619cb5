use clap::Parser;
use slotmatch_server::{serve, Config, SqliteSlotStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Slotmatch: find the time two users have in common
#[derive(Parser, Debug)]
#[command(name = "slotmatch-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides `server.bind`
    #[arg(long, env = "SLOTMATCH_BIND")]
    bind: Option<String>,

    /// SQLite URL, overrides `database.url`
    #[arg(long, env = "SLOTMATCH_DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    config.validate()?;

    let store = SqliteSlotStore::connect(&config.database).await?;

    serve(config, Arc::new(store)).await?;

    Ok(())
}
