//! Validar CLI: companion binary for the Validar suite
//!
//! ## Usage
//!
//! ```bash
//! validador check                 # Probe the deployment under test
//! validador config                # Print resolved settings
//! validador locators              # List the locator registry
//! validador destinations          # List navigation menu paths
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use validador::{CheckArgs, Cli, CliError, CliResult, Commands};
use validar::api::Client;
use validar::ui::{Destination, LocatorRegistry};
use validar::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Check(args) => run_check(args).await,
        Commands::Config => run_config(),
        Commands::Locators => run_locators(),
        Commands::Destinations => run_destinations(),
    }
}

fn load_settings(server_override: Option<&str>) -> CliResult<Settings> {
    match server_override {
        Some(server) => Ok(Settings::from_env()
            .unwrap_or_default()
            .with_server_url(server)),
        None => Settings::from_env().map_err(|_| {
            CliError::config("set VALIDAR_SERVER_URL or pass --server")
        }),
    }
}

async fn run_check(args: CheckArgs) -> CliResult<()> {
    let settings = load_settings(args.server.as_deref())?;
    let client = Client::new(&settings)?;
    let status = client.status().await?;
    println!("{} is up", settings.server_url);
    println!("  version:     {}", status.version);
    if let Some(api_version) = status.api_version {
        println!("  api version: {api_version}");
    }
    Ok(())
}

fn run_config() -> CliResult<()> {
    let settings = load_settings(None)?;
    println!("server:            {}", settings.server_url);
    println!("username:          {}", settings.username);
    println!("password:          ********");
    println!("verify tls:        {}", settings.verify_tls);
    println!("cli binary:        {}", settings.cli_binary);
    println!("wait timeout:      {}ms", settings.wait_timeout_ms);
    println!("poll interval:     {}ms", settings.poll_interval_ms);
    println!("headless:          {}", settings.headless);
    Ok(())
}

fn run_locators() -> CliResult<()> {
    let registry = LocatorRegistry::new();
    for name in registry.names() {
        if let Some(selector) = registry.get(name) {
            println!("{name:<40} {selector}");
        }
    }
    println!("{} locators", registry.count());
    Ok(())
}

fn run_destinations() -> CliResult<()> {
    for destination in Destination::all() {
        println!(
            "{:<24} {}",
            destination.name(),
            destination.menu_path().join(" -> ")
        );
    }
    Ok(())
}
