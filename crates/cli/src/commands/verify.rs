// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use anyhow::{bail, Context};
use atstdd_kernel::{verify_batch, AttestError, MismatchReason, StaticLedger};

use super::pack::load_batch;
use super::predict::attester_address;
use crate::config::CliConfig;

/// Which attester to check: given directly, or predicted from its collection name.
pub enum Target {
    Attester(Address),
    Collection {
        name: String,
        eas: Option<Address>,
        bytecode: Option<PathBuf>,
    },
}

pub fn run(config: &CliConfig, attestations: &Path, ledger_path: &Path, target: Target) -> anyhow::Result<()> {
    let batch = load_batch(attestations)?;
    let ledger = StaticLedger::load(ledger_path)
        .with_context(|| format!("Failed to load ledger from {}", ledger_path.display()))?;

    let attester = match target {
        Target::Attester(addr) => addr,
        Target::Collection { name, eas, bytecode } => attester_address(config, eas, &name, bytecode, None)?,
    };

    match verify_batch(&ledger, attester, &batch) {
        Ok(outcome) => {
            println!("\n✅ VERIFIED\n");
            println!("Attester:          {}", outcome.attester.to_checksum(None));
            println!("Verification Hash: {}", outcome.vhash);
            println!("Records:           {} in {} groups\n", outcome.records, outcome.groups);
            println!("verification successful");
            Ok(())
        }
        Err(AttestError::VerificationMismatch(reason)) => {
            println!("\n❌ FAILED\n");
            match &reason {
                MismatchReason::NotLocked => println!("Attester {attester} is not locked"),
                MismatchReason::HashMismatch { expected, found } => {
                    println!("Expected Hash: {expected}");
                    println!("Found Hash:    {found}");
                }
            }
            bail!("verification failed: {reason}")
        }
        Err(e) => Err(e.into()),
    }
}
