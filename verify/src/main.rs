// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloy_primitives::Address;
use anyhow::{Context, Result};
use atstdd_kernel::config::PROOF_VERSION;
use atstdd_kernel::proof::VerificationProof;
use atstdd_kernel::VerificationHash;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Encoded attestations file (e.g. attestations.json)
    attestations: PathBuf,

    /// Hash read from the locked attester; exit non-zero if it differs
    #[arg(long)]
    expected: Option<VerificationHash>,

    /// Attester the expected hash was read from, recorded in the proof
    #[arg(long)]
    attester: Option<Address>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    eprintln!("atstdd verifier v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("Proof version: {}", PROOF_VERSION);

    let mut proof = VerificationProof::from_file(&args.attestations)
        .with_context(|| format!("Failed to hash {}", args.attestations.display()))?;
    if let Some(attester) = args.attester {
        proof = proof.with_attester(attester);
    }

    println!("{}", serde_json::to_string_pretty(&proof)?);

    if let Some(expected) = args.expected {
        if expected != proof.verification_hash {
            anyhow::bail!(
                "verification hash mismatch: expected {}, found {}",
                expected,
                proof.verification_hash
            );
        }
        eprintln!("verification successful");
    }

    Ok(())
}
