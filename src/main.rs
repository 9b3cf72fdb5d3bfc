mod app;
mod config;
mod data;
mod stats;
mod visual;

use app::App;
use clap::Parser;
use config::Config;
use std::io;
use std::process;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let config = Config::parse();
    init_logging(&config.log_level);
    debug!(data_dir = %config.data_dir.display(), "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(config.data_dir, stdin.lock(), stdout.lock());

    if let Err(e) = app.run() {
        error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
