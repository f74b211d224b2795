//! CLI entry point for dirscout

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirscout::{ConsoleFormatter, Explorer, ExplorerConfig, LinePrompter, OutputConfig, print_fatal};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dirscout")]
#[command(about = "Explore a directory, list its entries and total up files, directories and sizes")]
#[command(version)]
struct Args {
    /// Directory to explore
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let output_config = OutputConfig::detect();
    let mut explorer = Explorer::new(
        ExplorerConfig::default(),
        ConsoleFormatter::new(output_config.clone()),
        LinePrompter::stdio(),
    );

    if let Err(e) = explorer.explore(&args.path) {
        tracing::debug!(error = ?e, "exploration failed");
        if print_fatal(&e, &output_config).is_err() {
            eprintln!("dirscout: {}", e);
        }
        process::exit(1);
    }
}
