//! `polar-networks init` command — generate the default TOML configuration file.

use std::fs;
use std::path::Path;

use polar_networks::config::generate_default_config;
use polar_networks::{ConfigError, Error};

/// Execute the `init` command.
///
/// Writes the default TOML template to `output`. Refuses to overwrite an
/// existing file unless `force` is `true`.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// writing fails.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    if output.exists() && !force {
        return Err(Error::Usage(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }

    fs::write(output, generate_default_config()).map_err(|source| ConfigError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    eprintln!("Config file written to {}", output.display());
    Ok(())
}
