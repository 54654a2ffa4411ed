//! The network registry: every declared environment plus the default selector.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CONFIG, Format};
use crate::error::ConfigError;
use crate::network::{Account, NetworkProfile, RawNetworkProfile};

/// Test-runner timeout used when the document has no `mocha.timeout`.
pub const DEFAULT_TEST_TIMEOUT_MS: u64 = 60_000;

/// Test-runner settings (`[mocha]` section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunner {
    /// Per-test timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

const fn default_timeout() -> u64 {
    DEFAULT_TEST_TIMEOUT_MS
}

impl Default for TestRunner {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TEST_TIMEOUT_MS,
        }
    }
}

/// Document shape before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegistry {
    default_network: String,
    #[serde(default, deserialize_with = "unique_networks")]
    networks: BTreeMap<String, RawNetworkProfile>,
    #[serde(default)]
    mocha: TestRunner,
}

/// Deserializes the `networks` map, rejecting a name declared twice.
///
/// TOML parsers already refuse duplicate keys; JSON parsers keep the last one.
fn unique_networks<'de, D>(deserializer: D) -> Result<BTreeMap<String, RawNetworkProfile>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{MapAccess, Visitor};
    use std::fmt;

    struct NetworksVisitor;

    impl<'de> Visitor<'de> for NetworksVisitor {
        type Value = BTreeMap<String, RawNetworkProfile>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of network names to network profiles")
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut networks = BTreeMap::new();
            while let Some(name) = access.next_key::<String>()? {
                if networks.contains_key(&name) {
                    return Err(serde::de::Error::custom(format!(
                        "network '{name}' is declared more than once"
                    )));
                }
                let profile: RawNetworkProfile = access.next_value()?;
                networks.insert(name, profile);
            }
            Ok(networks)
        }
    }

    deserializer.deserialize_map(NetworksVisitor)
}

/// Immutable set of network profiles, built once and passed by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    default_network: String,
    networks: BTreeMap<String, NetworkProfile>,
    mocha: TestRunner,
}

impl Registry {
    /// Builds a registry from already constructed profiles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if a profile fails validation and
    /// [`ConfigError::InvalidDefault`] if `default_network` is not a key of
    /// `networks`.
    pub fn new(
        default_network: impl Into<String>,
        networks: BTreeMap<String, NetworkProfile>,
        test_timeout_ms: u64,
    ) -> Result<Self, ConfigError> {
        for (name, profile) in &networks {
            profile.validate(name)?;
        }
        let default_network = default_network.into();
        if !networks.contains_key(&default_network) {
            return Err(ConfigError::InvalidDefault(default_network));
        }
        Ok(Self {
            default_network,
            networks,
            mocha: TestRunner {
                timeout: test_timeout_ms,
            },
        })
    }

    /// Loads the built-in configuration shipped with the crate.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded document itself is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Loads a configuration file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise any
    /// error from parsing and validation.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read config file");
        Self::from_str_as(&content, Format::from_path(path))
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// See [`Registry::from_str_as`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_str_as(content, Format::Toml)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// See [`Registry::from_str_as`].
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_str_as(content, Format::Json)
    }

    /// Parses a document in the given format and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for syntax errors, missing required
    /// fields or invalid values, [`ConfigError::UnresolvedEnv`] for an unset
    /// mnemonic variable, and [`ConfigError::InvalidDefault`] when
    /// `defaultNetwork` is not declared.
    pub fn from_str_as(content: &str, format: Format) -> Result<Self, ConfigError> {
        let raw: RawRegistry = match format {
            Format::Toml => toml::from_str(content).map_err(|e| ConfigError::Malformed(e.to_string()))?,
            Format::Json => {
                serde_json::from_str(content).map_err(|e| ConfigError::Malformed(e.to_string()))?
            }
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawRegistry) -> Result<Self, ConfigError> {
        // Identical account lists collapse onto one shared allocation.
        let mut shared: Vec<Arc<[Account]>> = Vec::new();
        let mut networks = BTreeMap::new();

        for (name, raw_profile) in raw.networks {
            let accounts = raw_profile.resolved_accounts(&name)?;
            let accounts = if let Some(existing) = shared.iter().find(|s| s[..] == accounts[..]) {
                Arc::clone(existing)
            } else {
                let list: Arc<[Account]> = accounts.into();
                shared.push(Arc::clone(&list));
                list
            };
            let profile = raw_profile.into_profile(&name, accounts)?;
            tracing::debug!(
                network = %name,
                chain_id = %profile.chain_id,
                endpoint = %profile.endpoint,
                accounts = profile.accounts.len(),
                "validated network profile"
            );
            networks.insert(name, profile);
        }

        if !networks.contains_key(&raw.default_network) {
            return Err(ConfigError::InvalidDefault(raw.default_network));
        }
        tracing::info!(
            networks = networks.len(),
            default = %raw.default_network,
            "loaded network registry"
        );
        Ok(Self {
            default_network: raw.default_network,
            networks,
            mocha: raw.mocha,
        })
    }

    /// Returns the profile declared as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownNetwork`] if no such network exists.
    pub fn get(&self, name: &str) -> Result<&NetworkProfile, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_owned()))
    }

    /// Returns the default network's profile.
    ///
    /// # Errors
    ///
    /// Never fails for a registry built through this module's constructors;
    /// the signature mirrors [`Registry::get`].
    pub fn get_default(&self) -> Result<&NetworkProfile, ConfigError> {
        self.get(&self.default_network)
    }

    /// Finds `account_name` in the account list of `network_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownNetwork`] or
    /// [`ConfigError::UnknownAccount`].
    pub fn resolve_account(
        &self,
        network_name: &str,
        account_name: &str,
    ) -> Result<&Account, ConfigError> {
        self.get(network_name)?
            .account(account_name)
            .ok_or_else(|| ConfigError::UnknownAccount {
                network: network_name.to_owned(),
                account: account_name.to_owned(),
            })
    }

    /// Name of the default network.
    #[must_use]
    pub fn default_network_name(&self) -> &str {
        &self.default_network
    }

    /// Declared network names in sorted order.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Declared networks in sorted name order.
    pub fn networks(&self) -> impl Iterator<Item = (&str, &NetworkProfile)> {
        self.networks.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    /// Per-test timeout for the test runner.
    #[must_use]
    pub const fn test_runner_timeout(&self) -> Duration {
        Duration::from_millis(self.mocha.timeout)
    }

    /// Serializes the registry back into the TOML input shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if a value has no TOML
    /// representation (e.g. a `null` inside `types`).
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Serializes the registry into pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }
}
