use std::io::Write;

use pricecast::Config;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::App;

/// Log filter: `RUST_LOG` wins, else the configured level for this crate
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pricecast={},reqwest=warn,hyper=warn", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt() {
    print!("pricecast> ");
    if let Err(e) = std::io::stdout().flush() {
        debug!("Failed to flush prompt: {}", e);
    }
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    init_logging(&config.log_level);

    info!("📊 Starting pricecast v{}", env!("CARGO_PKG_VERSION"));
    info!("   Prediction service: {}", config.api_url);
    info!("   Charts: {}x{} in {}", config.chart_width, config.chart_height, config.output_dir.display());

    let mut app = App::new(config);

    // Arguments run as the first command, e.g. `pricecast load AAPL 1y`
    let initial: Vec<String> = std::env::args().skip(1).collect();
    if !initial.is_empty() && !commands::handle_line(&mut app, &initial.join(" ")).await {
        return;
    }

    println!("Type `help` for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        match lines.next_line().await {
            Ok(Some(line)) => {
                if !commands::handle_line(&mut app, &line).await {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    info!("👋 Bye");
}
