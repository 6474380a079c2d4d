//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

/// Validar suite companion
#[derive(Debug, Parser)]
#[command(name = "validador", version, about = "Companion CLI for the Validar suite")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the deployment's status endpoint
    Check(CheckArgs),
    /// Print the resolved suite settings
    Config,
    /// List the locator registry
    Locators,
    /// List navigation destinations and their menu paths
    Destinations,
}

/// Arguments for `check`
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Server URL override (otherwise `VALIDAR_SERVER_URL`)
    #[arg(long)]
    pub server: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_with_server_override() {
        let cli = Cli::try_parse_from(["validador", "check", "--server", "https://forja.test"])
            .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.server.as_deref(), Some("https://forja.test"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["validador", "-vv", "locators"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
