//! finview - Interactive TUI viewer for financial-inclusion indicators.
//!
//! Supports two modes:
//! - Live mode (default): fetch the dataset from the remote API at startup
//! - File mode: view a local dataset file with the same envelope shape
//!
//! Usage:
//!   finview                   # fetch from the remote API
//!   finview --file data.json  # view a local dataset file

use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use finview::collector::ApiCollector;
use finview::provider::{ApiProvider, FileProvider, RecordProvider};
use finview::tui::App;

/// Redraw cadence for the event loop.
const TICK_RATE: Duration = Duration::from_millis(500);

/// Interactive TUI viewer for financial-inclusion indicators.
#[derive(Parser)]
#[command(name = "finview", about = "Financial inclusion indicator viewer")]
struct Args {
    /// View a local dataset file instead of fetching from the API.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<String>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("finview={}", level).parse().unwrap());

    // Diagnostics go to stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let provider: Box<dyn RecordProvider> = match args.file {
        Some(path) => Box::new(FileProvider::new(path)),
        None => Box::new(ApiProvider::new(ApiCollector::new())),
    };

    let app = App::new(provider);
    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
