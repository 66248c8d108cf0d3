//! CLI command definitions and argument parsing.

use crate::config::ExporterConfig;
use asterisk_domain::Family;
use clap::{Args, Parser, Subcommand};

/// Asterisk Exporter - Prometheus metrics from the Asterisk console.
#[derive(Debug, Parser)]
#[command(name = "asterisk-exporter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ASTERISK_EXPORTER_CONFIG")]
    pub config: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve metrics over HTTP (default)
    Serve(ServeArgs),

    /// Run one console command and print the parsed record
    Query(QueryArgs),

    /// List known command families
    Families,
}

/// Arguments for the serve command.
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Address to listen on (e.g., 0.0.0.0:9200)
    #[arg(long)]
    pub listen_address: Option<String>,

    /// Path under which to expose metrics
    #[arg(long)]
    pub metrics_path: Option<String>,

    /// Path to the asterisk binary
    #[arg(long)]
    pub asterisk_path: Option<String>,

    /// Metric name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Maximum number of concurrent scrapes, 0 for no limit
    #[arg(long)]
    pub max_requests: Option<usize>,
}

impl ServeArgs {
    /// Override `config` with the flags that were given
    pub fn apply(self, config: &mut ExporterConfig) {
        if let Some(listen_address) = self.listen_address {
            config.listen_address = listen_address;
        }
        if let Some(metrics_path) = self.metrics_path {
            config.metrics_path = metrics_path;
        }
        if let Some(asterisk_path) = self.asterisk_path {
            config.asterisk_path = asterisk_path;
        }
        if let Some(prefix) = self.prefix {
            config.prefix = prefix;
        }
        if let Some(max_requests) = self.max_requests {
            config.max_requests = max_requests;
        }
    }
}

/// Arguments for the query command.
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Family to run (e.g., uptime, sip_dialogs)
    pub family: Family,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to the asterisk binary
    #[arg(long)]
    pub asterisk_path: Option<String>,
}
