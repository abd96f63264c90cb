// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloy_primitives::Address;
use anyhow::Result;
use std::path::Path;
use atstdd_kernel::file::{write_decoded, write_encoded};
use atstdd_kernel::verify::LedgerState;
use atstdd_kernel::{accumulate, pack, translate, DecodedAttestation, SchemaRegistry, StaticLedger};

const EVENT_ID: u64 = 4312;
const HOLDERS: u64 = 250;
const EVENT_START: u64 = 1_650_000_000;

fn main() -> Result<()> {
    let out_dir = Path::new("demo_db");
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir)?;
    }
    std::fs::create_dir_all(out_dir)?;

    println!("🎬 Generating POAP event #{EVENT_ID} dataset...");

    // --- Schemas ---
    let mut registry = SchemaRegistry::new();
    let token_schema = registry.register("uint256 eventID, uint256 tokenID, uint64 created", Address::ZERO, false);
    let summary_schema = registry.register("uint256 eventID, uint256 tokenCount", Address::ZERO, false);
    registry.save(out_dir.join("schemas.json"))?;

    // --- Attestations: one per holder, then the event summary ---
    println!("1. Minting {HOLDERS} token attestations...");
    let mut decoded: Vec<_> = (1..=HOLDERS)
        .map(|i| {
            DecodedAttestation::new(token_schema, Some(holder(i)))
                .with("eventID", EVENT_ID)
                .with("tokenID", i)
                .with("created", EVENT_START + rand_delay(i))
        })
        .collect();
    decoded.push(
        DecodedAttestation::new(summary_schema, None)
            .with("eventID", EVENT_ID)
            .with("tokenCount", HOLDERS),
    );
    write_decoded(out_dir.join("decoded.json"), &decoded)?;

    println!("2. Encoding...");
    let encoded = translate(&registry, &decoded)?;
    write_encoded(out_dir.join("attestations.json"), &encoded)?;

    // --- A locked ledger entry matching the batch ---
    println!("3. Locking a demo attester...");
    let vhash = accumulate(&pack(&encoded));
    let attester = Address::repeat_byte(0xa7);
    let mut ledger = StaticLedger::new();
    ledger.insert(attester, LedgerState { locked: true, vhash });
    ledger.save(out_dir.join("ledger.json"))?;

    println!("✅ Demo dataset generated at: {:?}", out_dir.canonicalize()?);
    println!("📊 Verification hash: {vhash}");
    println!(
        "   Try: atstdd verify -a demo_db/attestations.json -l demo_db/ledger.json --attester {attester}"
    );

    Ok(())
}

fn holder(i: u64) -> Address {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&(0x5eed_0000_0000_0000 ^ i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).to_be_bytes());
    Address::from(bytes)
}

// Deterministic Pseudo-Random
fn rand_delay(seed: u64) -> u64 {
    let mut x = seed;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    // Within the first six hours
    x % 21_600
}
