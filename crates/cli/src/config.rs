// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::Address;
use anyhow::Context;
use atstdd_kernel::config::{DETERMINISTIC_DEPLOYER, FACTORY};

pub const DEFAULT_LOG_FILTER: &str = "atstdd=info,atstdd_kernel=info";

pub struct CliConfig {
    pub factory: Address,
    pub deployer: Address,
    pub chain_id: Option<u64>,
    /// Hex file holding the attester creation bytecode.
    pub attester_bytecode: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            factory: FACTORY,
            deployer: DETERMINISTIC_DEPLOYER,
            chain_id: None,
            attester_bytecode: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Defaults overlaid with `ATSTDD_FACTORY`, `ATSTDD_CHAIN_ID`,
    /// `ATSTDD_ATTESTER_BYTECODE` and `RUST_LOG`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = get("ATSTDD_FACTORY") {
            config.factory = Address::from_str(raw.trim())
                .with_context(|| format!("ATSTDD_FACTORY is not an address: {raw}"))?;
        }
        if let Some(raw) = get("ATSTDD_CHAIN_ID") {
            let id = raw
                .trim()
                .parse()
                .with_context(|| format!("ATSTDD_CHAIN_ID is not a number: {raw}"))?;
            config.chain_id = Some(id);
        }
        if let Some(raw) = get("ATSTDD_ATTESTER_BYTECODE") {
            config.attester_bytecode = Some(PathBuf::from(raw));
        }
        if let Some(raw) = get("RUST_LOG") {
            config.log_filter = raw;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_overrides_defaults() {
        let env: HashMap<&str, &str> = [
            ("ATSTDD_CHAIN_ID", "420"),
            ("ATSTDD_FACTORY", "0x1111111111111111111111111111111111111111"),
        ]
        .into_iter()
        .collect();
        let config = CliConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.chain_id, Some(420));
        assert_eq!(config.factory, Address::repeat_byte(0x11));
        assert_eq!(config.deployer, DETERMINISTIC_DEPLOYER);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn bad_chain_id_is_rejected() {
        let result = CliConfig::from_lookup(|k| (k == "ATSTDD_CHAIN_ID").then(|| "optimism".to_string()));
        assert!(result.is_err());
    }
}
