// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Attestation files.
//!
//! The encoded-attestations file is the interchange format between `encode`,
//! publishing, and verification:
//!
//! ```text
//! [
//!   { "schema": "0x<32 bytes>", "recipient": "0x<20 bytes>" | null, "data": "0x<bytes>" },
//!   ...
//! ]
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::attestation::{DecodedAttestation, EncodedAttestation};

/// Writes through a sibling temp file and renames it into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    fs::rename(tmp_path, path)?;
    Ok(())
}

pub fn read_encoded(path: impl AsRef<Path>) -> Result<Vec<EncodedAttestation>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Pretty-printed with two-space indentation.
pub fn write_encoded(path: impl AsRef<Path>, attestations: &[EncodedAttestation]) -> Result<()> {
    let json = serde_json::to_string_pretty(attestations)?;
    write_atomic(path.as_ref(), json.as_bytes())
}

/// Generator output: `[{ "schema", "recipient", "data": { field: value } }]`.
pub fn read_decoded(path: impl AsRef<Path>) -> Result<Vec<DecodedAttestation>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn write_decoded(path: impl AsRef<Path>, attestations: &[DecodedAttestation]) -> Result<()> {
    let json = serde_json::to_string_pretty(attestations)?;
    write_atomic(path.as_ref(), json.as_bytes())
}

/// BLAKE3 of the file contents.
pub fn fingerprint(path: impl AsRef<Path>) -> Result<[u8; 32]> {
    let mut file = File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(*hasher.finalize().as_bytes())
}
