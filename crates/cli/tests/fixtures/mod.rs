// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::{address, b256, Address, B256};
use atstdd_kernel::file::write_decoded;
use atstdd_kernel::{DecodedAttestation, SchemaRegistry};

pub const TOKEN_SCHEMA: B256 = b256!("a3866145ae39fb20263674414f85b97c7ed76424a9bccd4d7302bea7d668cda6");
pub const SUMMARY_SCHEMA: B256 = b256!("283113b00b913ca6657ea4b088f2b926a86f76712c31d6819fbd2335aa61d477");
pub const HOLDER: Address = address!("5a384227b65fa093dec03ec34e111db80a040615");

/// Hash of the single-token scenario (eventID 1, tokenID 2, created 1000).
pub const SINGLE_TOKEN_VHASH: &str = "0xad6ce86b4766b259409b5086383fba6063abb99d1893917d47643067939cfee7";

pub struct ScenarioPaths {
    pub decoded: PathBuf,
    pub schemas: PathBuf,
    pub encoded: PathBuf,
    pub ledger: PathBuf,
}

fn write_schemas(dir: &Path) -> anyhow::Result<PathBuf> {
    let mut reg = SchemaRegistry::new();
    reg.insert(TOKEN_SCHEMA, "uint256 eventID, uint256 tokenID, uint64 created");
    reg.insert(SUMMARY_SCHEMA, "uint256 eventID, uint256 tokenCount");
    let path = dir.join("schemas.json");
    reg.save(&path)?;
    Ok(path)
}

fn paths(dir: &Path, schemas: PathBuf) -> ScenarioPaths {
    ScenarioPaths {
        decoded: dir.join("decoded.json"),
        schemas,
        encoded: dir.join("encoded.json"),
        ledger: dir.join("ledger.json"),
    }
}

/// One token attestation whose verification hash is known.
pub fn generate_single_token(dir: &Path) -> anyhow::Result<ScenarioPaths> {
    let paths = paths(dir, write_schemas(dir)?);
    let decoded = vec![DecodedAttestation::new(TOKEN_SCHEMA, Some(HOLDER))
        .with("eventID", 1u64)
        .with("tokenID", 2u64)
        .with("created", 1000u64)];
    write_decoded(&paths.decoded, &decoded)?;
    Ok(paths)
}

/// A small event: three tokens and the event summary.
pub fn generate_event(dir: &Path) -> anyhow::Result<ScenarioPaths> {
    let paths = paths(dir, write_schemas(dir)?);
    let mut decoded: Vec<_> = (1..=3u64)
        .map(|i| {
            DecodedAttestation::new(TOKEN_SCHEMA, Some(Address::repeat_byte(i as u8)))
                .with("eventID", 4312u64)
                .with("tokenID", i)
                .with("created", 1_650_000_000 + i)
        })
        .collect();
    decoded.push(
        DecodedAttestation::new(SUMMARY_SCHEMA, None)
            .with("eventID", 4312u64)
            .with("tokenCount", 3u64),
    );
    write_decoded(&paths.decoded, &decoded)?;
    Ok(paths)
}

/// Writes a ledger snapshot with a single attester entry.
pub fn write_ledger(path: &Path, attester: Address, locked: bool, vhash: &str) -> anyhow::Result<()> {
    let json = format!(
        r#"{{ "{attester}": {{ "locked": {locked}, "vhash": "{vhash}" }} }}"#
    );
    fs::write(path, json)?;
    Ok(())
}
