//! `polar-networks show` and `account` commands — print profiles and accounts.

use std::path::Path;

use polar_networks::{Account, Error, NetworkProfile, Registry};

use super::OutputFormat;

/// Picks the named profile, or the default one when no name is given.
fn select<'a>(registry: &'a Registry, network: Option<&str>) -> Result<&'a NetworkProfile, Error> {
    let profile = match network {
        Some(name) => registry.get(name)?,
        None => registry.get_default()?,
    };
    Ok(profile)
}

fn render(profile: &NetworkProfile, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Toml => toml::to_string(profile).map_err(|e| Error::Output(e.to_string())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(profile).map_err(|e| Error::Output(e.to_string()))
        }
    }
}

/// Account summary; the mnemonic only appears when `reveal` is set.
fn render_account(account: &Account, reveal: bool) -> String {
    let mut out = format!("name:     {}\naddress:  {}", account.name, account.address);
    if reveal {
        out.push_str("\nmnemonic: ");
        out.push_str(&account.mnemonic);
    }
    out
}

/// Execute the `show` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the network is
/// unknown, or the profile cannot be rendered.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path, network: Option<&str>, format: OutputFormat) -> Result<(), Error> {
    let registry = Registry::load_file(config_path)?;
    println!("{}", render(select(&registry, network)?, format)?);
    Ok(())
}

/// Execute the `account` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the network or
/// account is unknown.
#[allow(clippy::print_stdout)]
pub fn account(config_path: &Path, network: &str, name: &str, reveal: bool) -> Result<(), Error> {
    let registry = Registry::load_file(config_path)?;
    println!("{}", render_account(registry.resolve_account(network, name)?, reveal));
    Ok(())
}
