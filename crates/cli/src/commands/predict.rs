// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use anyhow::{bail, Context};
use atstdd_kernel::address::{predict_attester, predict_factory};
use atstdd_kernel::config::{resolve, EAS};

use crate::config::CliConfig;

/// Reads creation bytecode stored as hex text, with or without `0x`.
pub fn read_bytecode(path: &Path) -> anyhow::Result<Vec<u8>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bytecode from {}", path.display()))?;
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.is_empty() {
        bail!("bytecode file {} is empty", path.display());
    }
    hex::decode(digits).with_context(|| format!("bytecode in {} is not hex", path.display()))
}

/// Address the factory will deploy the attester for `name` to.
pub fn attester_address(
    config: &CliConfig,
    eas: Option<Address>,
    name: &str,
    bytecode: Option<PathBuf>,
    factory: Option<Address>,
) -> anyhow::Result<Address> {
    let eas = resolve(EAS, config.chain_id, eas)?;
    let Some(bytecode) = bytecode.or_else(|| config.attester_bytecode.clone()) else {
        bail!("no attester bytecode: pass --bytecode or set ATSTDD_ATTESTER_BYTECODE");
    };
    let bytecode = read_bytecode(&bytecode)?;
    Ok(predict_attester(factory.unwrap_or(config.factory), &bytecode, eas, name))
}

/// Factory to deploy through: an explicit address, else the address the
/// configured deployer places `factory_bytecode` at, else the published factory.
pub fn factory_address(
    config: &CliConfig,
    factory: Option<Address>,
    factory_bytecode: Option<&Path>,
) -> anyhow::Result<Address> {
    match (factory, factory_bytecode) {
        (Some(addr), _) => Ok(addr),
        (None, Some(path)) => Ok(predict_factory(config.deployer, &read_bytecode(path)?)),
        (None, None) => Ok(config.factory),
    }
}

pub fn run(
    config: &CliConfig,
    eas: Option<Address>,
    name: &str,
    bytecode: Option<PathBuf>,
    factory: Option<Address>,
    factory_bytecode: Option<PathBuf>,
) -> anyhow::Result<()> {
    let factory = factory_address(config, factory, factory_bytecode.as_deref())?;
    if factory_bytecode.is_some() {
        println!("factory:  {}", factory.to_checksum(None));
    }
    let address = attester_address(config, eas, name, bytecode, Some(factory))?;
    println!("{}", address.to_checksum(None));
    Ok(())
}
