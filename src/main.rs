use std::path::Path;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use technews::cli::{Cli, Commands};
use technews::config::Config;
use technews::domain::Digest;
use technews::errors::FeederResult;
use technews::services::{send_digest, FetchService, PublishService};
use technews::sources::SourceRegistry;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> FeederResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize sources
    let source_registry = SourceRegistry::from_config(&config, &cli.subreddits)?;
    let fetch_service = FetchService::new(source_registry, usize::from(cli.limit));

    match cli.command {
        Commands::Notify { dry_run } => cmd_notify(&fetch_service, &config, dry_run),
        Commands::Publish { output, dry_run } => cmd_publish(&fetch_service, &output, dry_run),
    }
}

fn cmd_notify(fetch_service: &FetchService, config: &Config, dry_run: bool) -> FeederResult<()> {
    println!("Fetching tech headlines...\n");

    let fetches = fetch_service.fetch_all();
    let digest = Digest::from_fetches(Local::now().naive_local(), &fetches, fetch_service.limit());

    if dry_run {
        println!("[DRY RUN] Digest that would be sent:\n");
        println!("{}", digest.format());
        return Ok(());
    }

    // Send failures are reported, never fatal
    match send_digest(&config.telegram, &digest) {
        Ok(()) => println!("✅ Digest sent to Telegram"),
        Err(e) => println!("❌ Send failed: {}", e),
    }

    Ok(())
}

fn cmd_publish(fetch_service: &FetchService, output: &Path, dry_run: bool) -> FeederResult<()> {
    if !dry_run {
        println!("Building RSS feed...\n");
    }

    let fetches = fetch_service.fetch_all();
    let service = PublishService::default();

    if dry_run {
        println!("{}", service.render(fetches, chrono::Utc::now())?);
        return Ok(());
    }

    let bytes = service.publish(fetches, output)?;
    println!("✅ RSS feed saved: {} ({} bytes)", output.display(), bytes);

    Ok(())
}
