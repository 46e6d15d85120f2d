use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 32-byte Aptos account address.
///
/// Parses both the long form (64 hex digits) and the short form (`0x1`, `0xabc`), which is
/// left-padded with zeros. `Display` renders the short form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; 32]);

impl AccountAddress {
    pub const LENGTH: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `0x` followed by all 64 hex digits.
    pub fn to_long_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for AccountAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix("0x")
            .ok_or_else(|| Error::InvalidAddress(format!("'{s}' is missing the 0x prefix")))?;

        if digits.is_empty() || digits.len() > 2 * Self::LENGTH {
            return Err(Error::InvalidAddress(format!("'{s}' has a bad length")));
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| Error::InvalidAddress(format!("'{s}': {e}")))?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = hex::encode(self.0);
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            write!(f, "0x0")
        } else {
            write!(f, "0x{trimmed}")
        }
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({self})")
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_long_string())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_is_left_padded() {
        let addr: AccountAddress = "0xabc".parse().unwrap();
        assert_eq!(addr.as_bytes()[30], 0x0a);
        assert_eq!(addr.as_bytes()[31], 0xbc);
        assert_eq!(addr.to_string(), "0xabc");
        assert_eq!(addr.to_long_string().len(), 66);
    }

    #[test]
    fn long_and_short_forms_are_equal() {
        let short: AccountAddress = "0x1".parse().unwrap();
        let long: AccountAddress =
            "0x0000000000000000000000000000000000000000000000000000000000000001"
                .parse()
                .unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!("abc".parse::<AccountAddress>().is_err());
        assert!("0x".parse::<AccountAddress>().is_err());
        assert!("0xzz".parse::<AccountAddress>().is_err());
        assert!(format!("0x{}", "1".repeat(65)).parse::<AccountAddress>().is_err());
    }

    #[test]
    fn zero_address_displays_as_0x0() {
        assert_eq!(AccountAddress::new([0; 32]).to_string(), "0x0");
    }
}
