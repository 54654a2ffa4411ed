//! `polar-networks list` command.

use std::path::Path;

use polar_networks::{Error, Registry};

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path) -> Result<(), Error> {
    let registry = Registry::load_file(config_path)?;
    for (name, profile) in registry.networks() {
        let marker = if name == registry.default_network_name() { "*" } else { " " };
        println!("{marker} {name:<16} {:<16} {}", profile.chain_id, profile.endpoint);
    }
    Ok(())
}
