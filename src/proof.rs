// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Verification receipts.

use std::path::Path;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::config::PROOF_VERSION;
use crate::error::Result;
use crate::file::{fingerprint, read_encoded};
use crate::hashchain::accumulate;
use crate::pack::pack;
use crate::types::hash::VerificationHash;

/// Receipt binding an attestations file to the verification hash it commits to.
///
/// Two parties holding the same file produce identical receipts, so the
/// receipt can be exchanged instead of the file to compare copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationProof {
    pub version: u32,

    /// BLAKE3 of the attestations file as stored on disk.
    #[serde(with = "hex::serde")]
    pub attestations_hash: [u8; 32],

    pub verification_hash: VerificationHash,

    pub group_count: u64,
    pub record_count: u64,

    /// Attester the hash was checked against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attester: Option<Address>,
}

impl VerificationProof {
    /// Builds the receipt for an encoded-attestations file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let batch = pack(&read_encoded(path)?);
        Ok(Self {
            version: PROOF_VERSION,
            attestations_hash: fingerprint(path)?,
            verification_hash: accumulate(&batch),
            group_count: batch.group_count() as u64,
            record_count: batch.record_count() as u64,
            attester: None,
        })
    }

    pub fn with_attester(mut self, attester: Address) -> Self {
        self.attester = Some(attester);
        self
    }

    /// True when both receipts commit to the same batch, regardless of file formatting.
    pub fn matches(&self, other: &VerificationProof) -> bool {
        self.verification_hash == other.verification_hash
            && self.group_count == other.group_count
            && self.record_count == other.record_count
    }
}
