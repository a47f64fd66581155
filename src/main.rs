//! # PostClaw — scheduled LinkedIn auto-posting.
//!
//! Invoked by an external scheduler from two fixed cron entries (12:00 and
//! 17:00 UTC). Each run gates itself on the every-2nd-day cadence and the
//! alternating morning/afternoon window, then composes and publishes one
//! post, with a heads-up notification ten minutes ahead.
//!
//! Usage:
//!   postclaw                        # normal gated run
//!   postclaw --dry-run              # compose today's post, no waits, no network
//!   postclaw --config postclaw.toml # TOML config instead of environment

use anyhow::Result;
use clap::Parser;
use postclaw_core::PostClawConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "postclaw",
    version,
    about = "Scheduled LinkedIn auto-posting pipeline"
)]
struct Cli {
    /// Read configuration from a TOML file instead of the environment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gate, select, and compose only — skip waits, notifications, publishing
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => PostClawConfig::load_from(path)?,
        None => PostClawConfig::from_env(),
    };
    tracing::debug!(
        "timezone={}, anchor={}, topics={}",
        config.timezone,
        config.anchor_date,
        config.topics_csv
    );

    // A gate miss returns Ok (exit 0); a failed publish bubbles out as a
    // non-zero exit after the failure notification went out.
    postclaw_agent::run_pipeline(&config, cli.dry_run).await?;
    Ok(())
}
