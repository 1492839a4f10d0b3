//! Fetch Comparator - Main CLI Application
//!
//! Compares the latency of plain HTTP fetches against headless-browser page
//! loads and renders the collected timings as a box-and-whisker chart.

use clap::Parser;
use fetch_comparator::{app::App, cli::Cli, config};
use std::process;

#[tokio::main]
async fn main() {
    // Environment file must be loaded before clap resolves env fallbacks
    config::load_env_file();

    let cli = Cli::parse();
    let use_colors = cli.use_colors();

    if let Err(e) = App::new(cli).run().await {
        eprintln!("{}", e.format_for_console(use_colors));
        process::exit(e.exit_code());
    }
}
