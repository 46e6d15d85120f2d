//! Environment-driven configuration.

use std::path::PathBuf;

use crate::address::AccountAddress;
use crate::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct Config {
    /// Account the `red_packet` module is published under
    pub module_address: AccountAddress,
    /// Fullnode REST root, e.g. `https://fullnode.devnet.aptoslabs.com/v1`
    pub node_url: String,
    /// Where the last-creator hint is kept
    pub last_creator_path: Option<PathBuf>,
}

impl Config {
    pub fn new(module_address: AccountAddress, node_url: impl Into<String>) -> Self {
        Self {
            module_address,
            node_url: node_url.into(),
            last_creator_path: None,
        }
    }

    /// `MODULE_ADDRESS` is required; every contract call depends on it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = lookup(MODULE_ADDRESS_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{MODULE_ADDRESS_ENV} must be set")))?;
        let module_address = raw
            .parse()
            .map_err(|e| Error::Config(format!("{MODULE_ADDRESS_ENV}: {e}")))?;

        let node_url = lookup(NODE_URL_ENV).unwrap_or_else(|| DEFAULT_NODE_URL.into());
        let last_creator_path = lookup(LAST_CREATOR_PATH_ENV).map(PathBuf::from);

        Ok(Self {
            module_address,
            node_url,
            last_creator_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_module_address_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup(&[(MODULE_ADDRESS_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_module_address_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[(MODULE_ADDRESS_ENV, "cafe")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_node_url() {
        let config = Config::from_lookup(lookup(&[(MODULE_ADDRESS_ENV, "0xcafe")])).unwrap();
        assert_eq!(config.module_address, "0xcafe".parse().unwrap());
        assert_eq!(config.node_url, DEFAULT_NODE_URL);
        assert!(config.last_creator_path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (MODULE_ADDRESS_ENV, "0x1"),
            (NODE_URL_ENV, "http://localhost:8080/v1"),
            (LAST_CREATOR_PATH_ENV, "/tmp/last"),
        ]))
        .unwrap();
        assert_eq!(config.node_url, "http://localhost:8080/v1");
        assert_eq!(config.last_creator_path, Some(PathBuf::from("/tmp/last")));
    }
}
