//! Polar network registry CLI
//!
//! Inspects and validates the network configuration used by Secret Network
//! development tooling.
//!
//! ```sh
//! polar-networks init              # Generate default polar.toml
//! polar-networks check             # Validate the config
//! polar-networks show testnet      # Print one network profile
//! ```

mod cmd;

#[cfg(feature = "telemetry")]
use std::io::IsTerminal;

use clap::Parser;
use cmd::{Cli, Commands};

#[allow(clippy::print_stderr)]
fn main() {
    // `.env` must be loaded before clap reads `CONFIG` from the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    #[cfg(feature = "telemetry")]
    polar_networks::telemetry::Telemetry::new()
        .with_log_level(if cli.verbose { "debug" } else { "warn" })
        .with_ansi(std::io::stderr().is_terminal())
        .register();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Check => cmd::check::run(&cli.config),
        Commands::List => cmd::list::run(&cli.config),
        Commands::Show { network, format } => {
            cmd::show::run(&cli.config, network.as_deref(), format)
        }
        Commands::Account {
            network,
            account,
            reveal,
        } => cmd::show::account(&cli.config, &network, &account, reveal),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
