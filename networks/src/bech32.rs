//! Bech32 address checksum verification (BIP-173).
//!
//! Only the syntactic form is checked: charset, case, separator and the
//! six-character checksum. Whether an address belongs to a mnemonic is left
//! to the signing tooling.

use thiserror::Error;

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const GENERATORS: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];
const CHECKSUM_LEN: usize = 6;
const MAX_LEN: usize = 90;

/// Reasons an address fails bech32 verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Bech32Error {
    /// Longer than 90 characters.
    #[error("longer than 90 characters")]
    TooLong,
    /// Upper- and lower-case letters are mixed.
    #[error("mixes upper and lower case")]
    MixedCase,
    /// No `1` separator, empty prefix, or data part too short.
    #[error("missing human-readable prefix or data part")]
    MissingSeparator,
    /// Character outside the bech32 alphabet.
    #[error("invalid character '{0}'")]
    InvalidChar(char),
    /// Checksum does not verify.
    #[error("checksum mismatch")]
    BadChecksum,
}

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    values.into_iter().fold(1_u32, |chk, value| {
        let top = chk >> 25;
        let mut chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
        chk
    })
}

/// Verifies a bech32 string and returns its human-readable prefix.
///
/// # Errors
///
/// Returns a [`Bech32Error`] describing the first problem found.
pub fn verify(address: &str) -> Result<String, Bech32Error> {
    if address.len() > MAX_LEN {
        return Err(Bech32Error::TooLong);
    }
    let has_lower = address.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = address.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }
    let address = address.to_ascii_lowercase();

    let (hrp, data) = address.rsplit_once('1').ok_or(Bech32Error::MissingSeparator)?;
    if hrp.is_empty() || data.len() < CHECKSUM_LEN {
        return Err(Bech32Error::MissingSeparator);
    }
    if let Some(c) = hrp.chars().find(|c| !(33..=126).contains(&u32::from(*c))) {
        return Err(Bech32Error::InvalidChar(c));
    }

    let mut values = Vec::with_capacity(hrp.len() * 2 + 1 + data.len());
    values.extend(hrp.bytes().map(|b| b >> 5));
    values.push(0);
    values.extend(hrp.bytes().map(|b| b & 0x1f));
    for c in data.chars() {
        let position = CHARSET
            .iter()
            .position(|&b| char::from(b) == c)
            .and_then(|p| u8::try_from(p).ok())
            .ok_or(Bech32Error::InvalidChar(c))?;
        values.push(position);
    }

    if polymod(values) == 1 {
        Ok(hrp.to_owned())
    } else {
        Err(Bech32Error::BadChecksum)
    }
}
