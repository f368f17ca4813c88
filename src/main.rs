//! ptt-trawl main entry point
//!
//! This is the command-line interface for the ptt-trawl board harvester.

use anyhow::Context;
use clap::Parser;
use ptt_trawl::config::{load_config_with_hash, Config};
use ptt_trawl::crawler::harvest;
use ptt_trawl::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// ptt-trawl: harvest posts and push comments from a bulletin board
///
/// Walks the newest listing pages of a board, then follows every post to
/// collect its publish time and comments.
#[derive(Parser, Debug)]
#[command(name = "ptt-trawl")]
#[command(version)]
#[command(about = "Harvest posts and comments from a PTT-style board", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Number of listing pages to walk (overrides forum.page-count)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pages: Option<u32>,

    /// Write harvested posts as JSON to this path (overrides output.results-path)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be fetched without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if let Some(pages) = cli.pages {
        config.forum.page_count = pages;
    }
    if let Some(output) = &cli.output {
        config.output.results_path = Some(output.display().to_string());
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(&config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ptt_trawl=info,warn"),
            1 => EnvFilter::new("ptt_trawl=debug,info"),
            2 => EnvFilter::new("ptt_trawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== ptt-trawl Dry Run ===\n");

    println!("Forum:");
    println!("  Board: {}", config.forum.board);
    println!("  Index: {}", config.forum.index_url());
    println!("  Listing pages: {}", config.forum.page_count);
    println!(
        "  Listing URL template: {}/bbs/{}/index{{N}}.html",
        config.forum.base_host, config.forum.board
    );

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!(
        "  Timeout: {}s (connect {}s)",
        config.http.timeout_secs, config.http.connect_timeout_secs
    );
    println!("  Proxy: {}", config.http.proxy.as_deref().unwrap_or("none"));

    println!("\nCrawler:");
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );

    println!("\nOutput:");
    println!(
        "  Backlog: {} (truncate: {})",
        config.output.backlog_path, config.output.truncate_backlog
    );
    println!(
        "  Results: {}",
        config.output.results_path.as_deref().unwrap_or("not written")
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let outcome = harvest(config)
        .await
        .with_context(|| format!("harvest of board {} failed", config.forum.board))?;

    if !quiet {
        print_statistics(&outcome.stats);
    }

    Ok(())
}
