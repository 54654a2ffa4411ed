//! Configuration sources and the default template.
//!
//! This module provides:
//!
//! - [`DEFAULT_CONFIG`] — The built-in TOML document, used both as the
//!   registry's static source and as the `init` template.
//! - [`Format`] — Input/output formats, selected by file extension.
//! - [`generate_default_config`] — Produces the commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! defaultNetwork = "development"
//!
//! [networks.development]
//! endpoint = "tcp://0.0.0.0:26657"
//! chainId = "secretdev-1"
//! keyringBackend = "test"
//!
//! [[networks.development.accounts]]
//! name = "a"
//! address = "secret1q2ewmd687qldpvp4vncrjtdc6ddw439qlv807s"
//! mnemonic = "$ACCOUNT_A_MNEMONIC"
//!
//! [mocha]
//! timeout = 60000
//! ```

use std::path::Path;

/// Built-in configuration document.
pub const DEFAULT_CONFIG: &str = include_str!("../polar.toml");

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// TOML, the primary format.
    #[default]
    Toml,
    /// JSON, accepted with the same keys.
    Json,
}

impl Format {
    /// Picks the format from a file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Generate the default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    DEFAULT_CONFIG.to_owned()
}
