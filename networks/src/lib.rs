//! Network profile registry for Secret Network development tooling.
//!
//! A [`Registry`] maps environment names (`development`, `testnet`, ...) to
//! [`NetworkProfile`]s holding the node endpoint, chain id, keyring backend,
//! test accounts and fee schedules that deployment and test tools need. It is
//! loaded and validated once, then shared read-only.
//!
//! ```
//! use polar_networks::Registry;
//!
//! let registry = Registry::load()?;
//! let dev = registry.get_default()?;
//! assert_eq!(dev.chain_id, "secretdev-1");
//!
//! let b = registry.resolve_account("default", "b")?;
//! assert_eq!(b.address, "secret1y98fdsl6vv3qdrwqfc74p45su5y8m4vqqgdfkw");
//! # Ok::<(), polar_networks::ConfigError>(())
//! ```

pub mod bech32;
pub mod config;
mod env;
pub mod error;
pub mod network;
pub mod registry;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use config::Format;
pub use error::{ConfigError, Error};
pub use network::{Account, Coin, FeeSpec, KeyringBackend, NetworkProfile};
pub use registry::Registry;
