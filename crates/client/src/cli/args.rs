pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "coms")]
#[command(about = "Browse buckets and object grants on an object management service")]
pub struct Args {
    /// Service root URL (defaults to the configured api_url)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the coms config directory (defaults to ~/.coms)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
