//! sui-profile: look up on-chain profiles from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # Profiles owned by two addresses, in the order given
//! sui-profile owner 0xa11ce... 0xb0b...
//!
//! # Profiles by object id, as JSON
//! sui-profile --json id 0x1a2b...
//!
//! # Does this address have a profile?
//! sui-profile --network testnet has-profile 0xa11ce...
//!
//! # Can this name still be claimed?
//! sui-profile name-available alice
//! ```
//!
//! The package and registry IDs come from `--package-id` / `--registry-id`,
//! then `SUI_PROFILE_PACKAGE_ID` / `SUI_PROFILE_REGISTRY_ID`, then the
//! built-in deployment for the selected network.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod profile_cli;

use profile_cli::{
    lookup::{HasProfileCmd, IdCmd, NameAvailableCmd, OwnerCmd},
    ClientArgs,
};

#[derive(Parser)]
#[command(
    name = "sui-profile",
    author,
    version,
    about = "Resolve Sui profiles by owner address or object id"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    client: ClientArgs,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve profiles by owner address
    Owner(OwnerCmd),

    /// Resolve profiles by profile object id
    Id(IdCmd),

    /// Check whether an address owns a profile
    HasProfile(HasProfileCmd),

    /// Check whether a profile name is still unclaimed
    NameAvailable(NameAvailableCmd),
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        command,
        client,
        json,
        verbose,
    } = Cli::parse();
    setup_logging(verbose);

    let client = client.build()?;

    match command {
        Commands::Owner(cmd) => cmd.execute(&client, json).await,
        Commands::Id(cmd) => cmd.execute(&client, json).await,
        Commands::HasProfile(cmd) => cmd.execute(&client, json).await,
        Commands::NameAvailable(cmd) => cmd.execute(&client, json).await,
    }
}
