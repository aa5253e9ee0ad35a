//! txfeed main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use txfeed_api::start_server;
use txfeed_client::HttpFeedSource;
use txfeed_config::Config;
use txfeed_core::FeedController;

#[derive(Parser, Debug)]
#[command(name = "txfeed")]
#[command(version = "0.1.0")]
#[command(about = "A small server-rendered demo transaction feed", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value_os_t = txfeed_config::default_config_path())]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {} ({})", e, e.code());
            for hint in e.suggestions() {
                eprintln!("  - {}", hint);
            }
            return Err(e).context("Failed to load configuration");
        }
    };

    let log_env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    env_logger::Builder::from_env(log_env).init();

    log::info!(
        "Config loaded from {}: upstream={}, render_limit={}, fallback_count={}",
        args.config.display(),
        config.upstream.base_url,
        config.feed.render_limit,
        config.feed.fallback_count
    );

    let source = Arc::new(HttpFeedSource::new(config.upstream.clone()));
    let controller = Arc::new(FeedController::new(source, config.feed.clone()));

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, controller))
}
