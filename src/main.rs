use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use pagefeed::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "pagefeed",
    about = "HTTP gateway that turns any web page into a JSON list or RSS feed via CSS selectors"
)]
struct Args {
    /// Path to a TOML config file (optional; defaults apply if absent)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Socket address to listen on (overrides the config file)
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    pagefeed::server::run(config).await
}
