//! Asterisk Exporter CLI
//!
//! Serves Prometheus metrics, or runs a single console command for debugging.

use anyhow::Context;
use asterisk_domain::Family;
use asterisk_exporter::cli::{Cli, Command, QueryArgs, ServeArgs};
use asterisk_exporter::config::ExporterConfig;
use asterisk_exporter::{build_poller, init_tracing, start_server};
use clap::Parser;
use std::process;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => serve(config, ServeArgs::default()).await,
        Some(Command::Serve(args)) => serve(config, args).await,
        Some(Command::Query(args)) => query(config, args),
        Some(Command::Families) => {
            for family in Family::ALL {
                println!("{:<22} {}", family.as_str(), family.command());
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&str>) -> anyhow::Result<ExporterConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path);
            ExporterConfig::from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path))
        }
        None => {
            warn!("No config file specified, using defaults");
            Ok(ExporterConfig::default())
        }
    }
}

async fn serve(mut config: ExporterConfig, args: ServeArgs) -> anyhow::Result<()> {
    args.apply(&mut config);
    config.validate().context("invalid configuration")?;
    start_server(config).await?;
    Ok(())
}

fn query(mut config: ExporterConfig, args: QueryArgs) -> anyhow::Result<()> {
    if let Some(path) = args.asterisk_path {
        config.asterisk_path = path;
    }

    let poller = build_poller(&config);
    let record = poller.collect(args.family);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{:#?}", record);
    }

    if record.is_unavailable() {
        warn!("{} returned its default record", args.family);
    }
    Ok(())
}
