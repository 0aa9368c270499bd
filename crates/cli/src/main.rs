use clap::Parser;
use ferrous_resolve_application::use_cases::ResolveHostnameUseCase;
use ferrous_resolve_domain::CliOverrides;
use ferrous_resolve_infrastructure::dns::{HickoryQueryFacility, QueryFacilityConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

mod bootstrap;
mod output;

#[derive(Parser, Debug)]
#[command(name = "ferrous-resolve")]
#[command(version)]
#[command(about = "Resolve a hostname to its CNAME or IP addresses against a chosen nameserver")]
struct Cli {
    /// Hostname to resolve
    hostname: String,

    /// Nameserver to query (defaults to resolver.nameserver, 1.1.1.1)
    nameserver: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Nameserver port when none is given in the address
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-query timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Do not retry truncated UDP answers over TCP
    #[arg(long)]
    no_tcp_fallback: bool,

    /// Print the result on a single line
    #[arg(long)]
    compact: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        timeout_ms: cli.timeout_ms,
        no_tcp_fallback: cli.no_tcp_fallback,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let nameserver = cli
        .nameserver
        .unwrap_or_else(|| config.resolver.nameserver.clone());

    debug!(
        hostname = %cli.hostname,
        nameserver = %nameserver,
        timeout_ms = config.resolver.timeout_ms,
        "Starting resolution"
    );

    let facility = Arc::new(HickoryQueryFacility::new(QueryFacilityConfig::from(
        &config.resolver,
    )));
    let use_case = ResolveHostnameUseCase::new(facility).with_port(config.resolver.port);

    let result = use_case.execute(&cli.hostname, &nameserver).await;

    match output::render(&result, cli.compact) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!(error = %e, "Failed to render result");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::from(output::exit_status(&result)))
}
