//! # Ferrous ACME DNS
//!
//! Publishes and withdraws ACME DNS-01 TXT records through the DNSimple API

use clap::{Parser, ValueEnum};
use ferrous_acme_dns_domain::config::ProbeErrorPolicy;
use ferrous_acme_dns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-acme-dns")]
#[command(version)]
#[command(about = "🦀 ACME DNS-01 TXT records for DNSimple hosted zones")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// API token
    #[arg(long, env = "FERROUS_ACME_DNS_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Account id; looked up with whoami when omitted
    #[arg(short = 'a', long, global = true)]
    account: Option<String>,

    /// Use the sandbox API
    #[arg(long, global = true)]
    sandbox: bool,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    /// What to do when a zone probe fails for a reason other than "not found"
    #[arg(long, value_enum, global = true)]
    on_probe_error: Option<ProbeErrorArg>,

    #[command(subcommand)]
    command: commands::Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProbeErrorArg {
    #[value(name = "treat_as_absent")]
    TreatAsAbsent,
    #[value(name = "abort")]
    Abort,
}

impl From<ProbeErrorArg> for ProbeErrorPolicy {
    fn from(arg: ProbeErrorArg) -> Self {
        match arg {
            ProbeErrorArg::TreatAsAbsent => ProbeErrorPolicy::TreatAsAbsent,
            ProbeErrorArg::Abort => ProbeErrorPolicy::Abort,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        api_token: cli.token,
        account_id: cli.account,
        sandbox: cli.sandbox,
        base_url: cli.base_url,
        log_level: cli.log_level,
        on_probe_error: cli.on_probe_error.map(Into::into),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        api_base = config.provider.api_base(),
        on_probe_error = ?config.resolver.on_probe_error,
        "Configuration loaded"
    );

    let services = di::Services::build(&config)?;
    commands::run(cli.command, &services).await
}
