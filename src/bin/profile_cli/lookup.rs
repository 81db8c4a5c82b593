//! Lookup subcommands: owner, id, has-profile, name-available.

use anyhow::Result;
use clap::Args;

use sui_profile_types::address::parse_address;
use sui_profile_types::{ObjectID, SuiAddress};

use super::output::{print_flag, print_lookup};
use super::CliClient;

#[derive(Args, Debug)]
pub struct OwnerCmd {
    /// Owner addresses, resolved and printed in this order
    #[arg(required = true, value_parser = parse_address)]
    pub addresses: Vec<SuiAddress>,
}

impl OwnerCmd {
    pub async fn execute(&self, client: &CliClient, json: bool) -> Result<()> {
        let lookup = client
            .profiles
            .resolve_many_by_owner(&self.addresses, client.use_cache)
            .await?;
        print_lookup(&lookup, json)
    }
}

#[derive(Args, Debug)]
pub struct IdCmd {
    /// Profile object ids, resolved and printed in this order
    #[arg(required = true, value_parser = parse_address)]
    pub ids: Vec<ObjectID>,
}

impl IdCmd {
    pub async fn execute(&self, client: &CliClient, json: bool) -> Result<()> {
        let lookup = client
            .profiles
            .resolve_many_by_id(&self.ids, client.use_cache)
            .await?;
        print_lookup(&lookup, json)
    }
}

#[derive(Args, Debug)]
pub struct HasProfileCmd {
    /// Owner address
    #[arg(value_parser = parse_address)]
    pub address: SuiAddress,
}

impl HasProfileCmd {
    pub async fn execute(&self, client: &CliClient, json: bool) -> Result<()> {
        let found = client
            .profiles
            .has_profile(self.address, client.use_cache)
            .await?;
        print_flag("has_profile", found, json)
    }
}

#[derive(Args, Debug)]
pub struct NameAvailableCmd {
    /// Profile name to check
    pub name: String,
}

impl NameAvailableCmd {
    pub async fn execute(&self, client: &CliClient, json: bool) -> Result<()> {
        let available = client.profiles.is_name_available(&self.name).await?;
        print_flag("available", available, json)
    }
}
