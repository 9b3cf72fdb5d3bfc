use clap::Parser;
use std::path::PathBuf;

/// Explore US bikeshare trip data interactively.
#[derive(Debug, Clone, Parser)]
#[command(name = "bikeshare", version)]
pub struct Config {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Log filter for stderr (e.g. "info", "bikeshare=debug")
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}
