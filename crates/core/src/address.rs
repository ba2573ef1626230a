//! Wallet address validation and normalization.
//!
//! Addresses are accepted in the forms users actually paste: with or without
//! the `0x` prefix, mixed case, surrounded by whitespace. A [`SuiAddress`] is
//! always stored normalized (trimmed, lowercased, `0x`-prefixed) so it can be
//! compared byte-for-byte against owner fields coming back from the RPC.
//!
//! Validation happens here, before any remote call is issued.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Maximum number of hex digits in an address (32 bytes).
pub const MAX_ADDRESS_DIGITS: usize = 64;

/// Errors produced when parsing a wallet address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address contains a non-hex character: '{0}'")]
    InvalidHex(char),

    #[error("address has {0} hex digits, the maximum is {MAX_ADDRESS_DIGITS}")]
    TooLong(usize),
}

/// A validated, normalized wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SuiAddress(String);

impl SuiAddress {
    /// Parse and normalize a raw address string.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let trimmed = raw.trim().to_lowercase();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }

        let digits = trimmed.strip_prefix("0x").unwrap_or(&trimmed);
        if digits.is_empty() {
            return Err(AddressError::Empty);
        }
        if digits.len() > MAX_ADDRESS_DIGITS {
            return Err(AddressError::TooLong(digits.len()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHex(bad));
        }

        Ok(Self(format!("0x{digits}")))
    }

    /// The normalized `0x`-prefixed form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an owner string from the RPC refers to this address.
    ///
    /// Owner fields arrive in whatever casing the node emits, so the
    /// comparison normalizes the other side the same way.
    pub fn matches(&self, owner: &str) -> bool {
        match Self::parse(owner) {
            Ok(other) => other == *self,
            Err(_) => false,
        }
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SuiAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
