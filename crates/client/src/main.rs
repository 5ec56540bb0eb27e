// CLI modules
mod cli;

use clap::{Parser, Subcommand};
use cli::{args::Args, op::Op, Bucket, Init, Object, Version};

use coms_client::logging::init_logging;
use coms_client::AppState;

command_enum! {
    (Bucket, Bucket),
    (Init, Init),
    (Object, Object),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // An uninitialized directory is fine: `init` creates it and the other
    // commands fall back to defaults without a bucket cache.
    let (state, load_error) = match AppState::load_optional(args.config_path.clone()) {
        Ok(state) => (state, None),
        Err(e) => (None, Some(e)),
    };
    let level = state
        .as_ref()
        .map(|s| s.config.log_level())
        .unwrap_or(tracing::Level::INFO);
    init_logging(level);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "ignoring unreadable coms config, using defaults");
    }

    let remote = cli::op::resolve_remote(args.remote, state.as_ref());

    let ctx = match cli::op::OpContext::new(remote, args.config_path, state) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
