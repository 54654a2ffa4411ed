//! Network profile types and their load-time validation.
//!
//! A [`NetworkProfile`] is built from a [`RawNetworkProfile`], the
//! all-optional shape that comes straight out of the TOML/JSON deserializer.
//! Conversion checks that required fields are present and that every value is
//! well-formed, so consumers never see a half-valid profile.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use crate::bech32;
use crate::env::resolve_env;
use crate::error::ConfigError;

/// Mnemonic lengths accepted by BIP-39.
const MNEMONIC_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Scheme of socket-file endpoints (`unix:///path/to/node.sock`).
const UNIX_SCHEME: &str = "unix";

/// Length of a hex-encoded Tendermint node id (20 bytes).
const NODE_ID_HEX_LEN: usize = 40;

/// A named test identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Short name used to look the account up (e.g. `"a"`).
    pub name: String,
    /// Bech32 chain address.
    pub address: String,
    /// BIP-39 seed phrase the address is derived from.
    pub mnemonic: String,
}

impl Account {
    /// Human-readable prefix of the address (e.g. `"secret"`).
    #[must_use]
    pub fn address_prefix(&self) -> Option<&str> {
        self.address.rsplit_once('1').map(|(hrp, _)| hrp)
    }

    fn validate(&self, network: &str) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::malformed_in(network, "account with empty name"));
        }
        bech32::verify(&self.address).map_err(|e| {
            ConfigError::malformed_in(
                network,
                format!("account '{}': address '{}' {e}", self.name, self.address),
            )
        })?;
        let words = self.mnemonic.split_whitespace().count();
        if !MNEMONIC_WORD_COUNTS.contains(&words) {
            return Err(ConfigError::malformed_in(
                network,
                format!("account '{}': mnemonic has {words} words", self.name),
            ));
        }
        Ok(())
    }
}

/// An amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Integer amount, kept as a decimal string.
    pub amount: String,
    /// Denomination (e.g. `"uscrt"`).
    pub denom: String,
}

/// Fee schedule for one transaction kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSpec {
    /// Fee coins, in declaration order.
    pub amount: Vec<Coin>,
    /// Gas limit, kept as a decimal string.
    pub gas: String,
}

impl FeeSpec {
    /// Gas limit as an integer, if it fits in a `u64`.
    #[must_use]
    pub fn gas_limit(&self) -> Option<u64> {
        self.gas.parse().ok()
    }

    fn validate(&self, network: &str, operation: &str) -> Result<(), ConfigError> {
        if !is_decimal(&self.gas) {
            return Err(ConfigError::malformed_in(
                network,
                format!("fee '{operation}': gas '{}' is not a decimal integer", self.gas),
            ));
        }
        for coin in &self.amount {
            if !is_decimal(&coin.amount) {
                return Err(ConfigError::malformed_in(
                    network,
                    format!(
                        "fee '{operation}': amount '{}' is not a decimal integer",
                        coin.amount
                    ),
                ));
            }
            if coin.denom.trim().is_empty() {
                return Err(ConfigError::malformed_in(
                    network,
                    format!("fee '{operation}': empty denom"),
                ));
            }
        }
        Ok(())
    }
}

fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Storage backend used by the signing tool's keyring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyringBackend {
    /// Operating-system credential store.
    Os,
    /// Encrypted file on disk.
    File,
    /// KDE wallet.
    Kwallet,
    /// `pass` password store.
    Pass,
    /// Unencrypted on-disk keyring for development.
    #[default]
    Test,
    /// In-memory keyring, discarded on exit.
    Memory,
}

impl KeyringBackend {
    /// Name as written in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::File => "file",
            Self::Kwallet => "kwallet",
            Self::Pass => "pass",
            Self::Test => "test",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for KeyringBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything tooling needs to talk to one environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// Node endpoint URI (`tcp://`, `http://`, ...).
    pub endpoint: String,
    /// Tendermint node id of the endpoint, hex encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Chain identifier (e.g. `"secretdev-1"`).
    pub chain_id: String,
    /// Skip light-client verification of node responses.
    pub trust_node: bool,
    /// Keyring backend for the signing tool.
    pub keyring_backend: KeyringBackend,
    /// Test identities; may be shared with other profiles.
    #[serde(serialize_with = "serialize_accounts")]
    pub accounts: Arc<[Account]>,
    /// Custom type registrations. Reserved; normally empty.
    pub types: serde_json::Map<String, serde_json::Value>,
    /// Fee schedules keyed by operation name (`upload`, `init`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<BTreeMap<String, FeeSpec>>,
}

fn serialize_accounts<S: Serializer>(accounts: &Arc<[Account]>, s: S) -> Result<S::Ok, S::Error> {
    accounts.as_ref().serialize(s)
}

impl NetworkProfile {
    /// Looks up an account by name.
    #[must_use]
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    /// Fee schedule for an operation, if one is declared.
    #[must_use]
    pub fn fee(&self, operation: &str) -> Option<&FeeSpec> {
        self.fees.as_ref()?.get(operation)
    }

    /// Checks every field of the profile declared as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] naming the first invalid field.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.chain_id.is_empty() || self.chain_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::malformed_in(
                name,
                format!("invalid chainId '{}'", self.chain_id),
            ));
        }

        let endpoint = url::Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::malformed_in(name, format!("invalid endpoint '{}': {e}", self.endpoint))
        })?;
        // Unix-socket endpoints carry a path instead of a host.
        let addressed = if endpoint.scheme() == UNIX_SCHEME {
            !matches!(endpoint.path(), "" | "/")
        } else {
            !endpoint.host_str().is_none_or(str::is_empty)
        };
        if !addressed {
            return Err(ConfigError::malformed_in(
                name,
                format!("endpoint '{}' has no host", self.endpoint),
            ));
        }

        if let Some(node_id) = &self.node_id
            && (node_id.len() != NODE_ID_HEX_LEN || hex::decode(node_id).is_err())
        {
            return Err(ConfigError::malformed_in(
                name,
                format!("nodeId '{node_id}' is not a {NODE_ID_HEX_LEN}-character hex id"),
            ));
        }

        if self.accounts.is_empty() {
            return Err(ConfigError::malformed_in(name, "accounts must not be empty"));
        }
        let mut seen = HashSet::with_capacity(self.accounts.len());
        for account in self.accounts.iter() {
            if !seen.insert(account.name.as_str()) {
                return Err(ConfigError::malformed_in(
                    name,
                    format!("duplicate account '{}'", account.name),
                ));
            }
            account.validate(name)?;
        }

        for (operation, fee) in self.fees.iter().flatten() {
            fee.validate(name, operation)?;
        }
        Ok(())
    }
}

/// Network profile as it appears in the input document.
///
/// Required fields are optional here so their absence can be reported
/// per network rather than as a bare deserializer error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNetworkProfile {
    /// See [`NetworkProfile::endpoint`].
    pub endpoint: Option<String>,
    /// See [`NetworkProfile::node_id`].
    #[serde(default)]
    pub node_id: Option<String>,
    /// See [`NetworkProfile::chain_id`].
    pub chain_id: Option<String>,
    /// See [`NetworkProfile::trust_node`].
    #[serde(default)]
    pub trust_node: bool,
    /// See [`NetworkProfile::keyring_backend`].
    #[serde(default)]
    pub keyring_backend: KeyringBackend,
    /// See [`NetworkProfile::accounts`].
    pub accounts: Option<Vec<Account>>,
    /// See [`NetworkProfile::types`].
    #[serde(default)]
    pub types: serde_json::Map<String, serde_json::Value>,
    /// See [`NetworkProfile::fees`].
    #[serde(default)]
    pub fees: Option<BTreeMap<String, FeeSpec>>,
}

impl RawNetworkProfile {
    /// Resolves env references in the account list, or reports it missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] when `accounts` is absent and
    /// [`ConfigError::UnresolvedEnv`] for an unset mnemonic variable.
    pub fn resolved_accounts(&self, name: &str) -> Result<Vec<Account>, ConfigError> {
        let accounts = self
            .accounts
            .as_ref()
            .ok_or_else(|| ConfigError::malformed_in(name, "missing required field 'accounts'"))?;
        accounts
            .iter()
            .map(|account| {
                Ok(Account {
                    mnemonic: resolve_env(&account.mnemonic)?,
                    ..account.clone()
                })
            })
            .collect()
    }

    /// Builds and validates the profile, attaching an already resolved
    /// account list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for a missing `endpoint` or
    /// `chainId`, or any field rejected by [`NetworkProfile::validate`].
    pub fn into_profile(
        self,
        name: &str,
        accounts: Arc<[Account]>,
    ) -> Result<NetworkProfile, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ConfigError::malformed_in(name, "missing required field 'endpoint'"))?;
        let chain_id = self
            .chain_id
            .ok_or_else(|| ConfigError::malformed_in(name, "missing required field 'chainId'"))?;

        let profile = NetworkProfile {
            endpoint,
            node_id: self.node_id,
            chain_id,
            trust_node: self.trust_node,
            keyring_backend: self.keyring_backend,
            accounts,
            types: self.types,
            fees: self.fees,
        };
        profile.validate(name)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC: &str = "echo strong slender door alley awful next evolve flame item direct woman \
        swallow gentle stool stock banner enjoy buddy orchard throw coconut build mix";

    fn account(name: &str) -> Account {
        Account {
            name: name.to_owned(),
            address: "secret1q2ewmd687qldpvp4vncrjtdc6ddw439qlv807s".to_owned(),
            mnemonic: MNEMONIC.to_owned(),
        }
    }

    fn profile() -> NetworkProfile {
        NetworkProfile {
            endpoint: "tcp://0.0.0.0:26657".to_owned(),
            node_id: Some("115aa0a629f5d70dd1d464bc7e42799e00f4edae".to_owned()),
            chain_id: "secretdev-1".to_owned(),
            trust_node: true,
            keyring_backend: KeyringBackend::Test,
            accounts: vec![account("a")].into(),
            types: serde_json::Map::new(),
            fees: None,
        }
    }

    fn assert_malformed(profile: &NetworkProfile, needle: &str) {
        match profile.validate("local") {
            Err(ConfigError::Malformed(message)) => {
                assert!(message.contains(needle), "{message} did not contain {needle}");
                assert!(message.contains("'local'"));
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn valid_profile_passes() {
        profile().validate("local").unwrap();
    }

    #[test]
    fn rejects_bad_endpoint() {
        let mut p = profile();
        p.endpoint = "0.0.0.0:26657".to_owned();
        assert_malformed(&p, "endpoint");
    }

    #[test]
    fn accepts_unix_socket_endpoint() {
        let mut p = profile();
        p.endpoint = "unix:///tmp/node.sock".to_owned();
        p.validate("local").unwrap();

        p.endpoint = "unix:///".to_owned();
        assert_malformed(&p, "has no host");
        p.endpoint = "mailto:ops@example.com".to_owned();
        assert_malformed(&p, "has no host");
    }

    #[test]
    fn rejects_short_node_id() {
        let mut p = profile();
        p.node_id = Some("115aa0".to_owned());
        assert_malformed(&p, "nodeId");
    }

    #[test]
    fn rejects_blank_chain_id() {
        let mut p = profile();
        p.chain_id = String::new();
        assert_malformed(&p, "chainId");
    }

    #[test]
    fn rejects_duplicate_accounts() {
        let mut p = profile();
        p.accounts = vec![account("a"), account("a")].into();
        assert_malformed(&p, "duplicate account 'a'");
    }

    #[test]
    fn rejects_truncated_mnemonic() {
        let mut p = profile();
        let mut short = account("a");
        short.mnemonic = "echo strong slender".to_owned();
        p.accounts = vec![short].into();
        assert_malformed(&p, "mnemonic has 3 words");
    }

    #[test]
    fn rejects_non_decimal_fee() {
        let mut p = profile();
        p.fees = Some(BTreeMap::from([(
            "upload".to_owned(),
            FeeSpec {
                amount: vec![Coin {
                    amount: "5e5".to_owned(),
                    denom: "uscrt".to_owned(),
                }],
                gas: "2000000".to_owned(),
            },
        )]));
        assert_malformed(&p, "amount '5e5'");
    }

    #[test]
    fn fee_and_account_lookup() {
        let mut p = profile();
        p.fees = Some(BTreeMap::from([(
            "init".to_owned(),
            FeeSpec {
                amount: vec![],
                gas: "500000".to_owned(),
            },
        )]));
        assert_eq!(p.fee("init").and_then(FeeSpec::gas_limit), Some(500_000));
        assert!(p.fee("upload").is_none());
        assert_eq!(p.account("a").and_then(Account::address_prefix), Some("secret"));
        assert!(p.account("z").is_none());
    }

    #[test]
    fn missing_required_fields_are_named() {
        let raw = RawNetworkProfile {
            endpoint: Some("http://localhost:1317".to_owned()),
            ..RawNetworkProfile::default()
        };
        let err = raw.resolved_accounts("staging").unwrap_err();
        assert!(err.to_string().contains("'accounts'"));

        let err = raw
            .into_profile("staging", vec![account("a")].into())
            .unwrap_err();
        assert!(err.to_string().contains("'chainId'"));
    }

    #[test]
    fn keyring_backend_names() {
        let parsed: KeyringBackend = serde_json::from_str("\"kwallet\"").unwrap();
        assert_eq!(parsed, KeyringBackend::Kwallet);
        assert_eq!(KeyringBackend::default().to_string(), "test");
        assert!(serde_json::from_str::<KeyringBackend>("\"vault\"").is_err());
    }
}
