//! Command-line interface for estate-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # 50 Favihome.Com agents and 500 estates
//! estate-seed -a 50 -e 500 -t 1
//!
//! # Estate Inc estates for agents already in the target
//! estate-seed --estate 200 --type 2
//!
//! # Reproducible run against another host
//! ESTATE_SEED_URL=http://tdg:8080 estate-seed -a 10 --seed 42
//!
//! # Check arguments without sending anything
//! estate-seed -a 10 -e 10 --dry-run
//! ```

use clap::Parser;
use estate_seed::seed::run_seed;
use estate_seed::TargetOpts;
use seed_populate::SeedArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "estate-seed")]
#[command(about = "Generator for agents and estates")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    seed: SeedArgs,

    /// Target service options
    #[command(flatten)]
    target: TargetOpts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Progress lines are info events, so default to info when RUST_LOG is unset
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run_seed(cli.target, cli.seed).await
}
