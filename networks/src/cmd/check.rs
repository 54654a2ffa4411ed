//! `polar-networks check` command — validate a configuration file.

use std::path::Path;

use polar_networks::{Error, Registry};

/// Execute the `check` command.
///
/// # Errors
///
/// Returns the first load or validation error.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path) -> Result<(), Error> {
    let registry = Registry::load_file(config_path)?;
    let count = registry.network_names().count();
    println!(
        "{}: {count} network(s) valid, default '{}'",
        config_path.display(),
        registry.default_network_name()
    );
    Ok(())
}
