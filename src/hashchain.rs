// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Verification hash chain.
//!
//! The on-chain attester folds every record it forwards into one digest; this
//! module recomputes the same digest offline.
//!
//! # Step
//! ```text
//! H_0     = 0x00..00
//! H_{i+1} = keccak256(abi.encode(
//!     bytes32 H_i,
//!     bytes32 schema,
//!     tuple(address recipient, uint64 expirationTime, bool revocable,
//!           bytes32 refUID, bytes data, uint256 value) record))
//! ```
//! Records are absorbed group by group, in batch order. The chain is linear;
//! there are no partial proofs.

use alloy_primitives::{keccak256, B256};
use alloy_sol_types::SolValue;
use tracing::debug;

use crate::config::ZERO_HASH;
use crate::pack::pack;
use crate::types::attestation::{Batch, EncodedAttestation, NormalizedRecord};
use crate::types::hash::VerificationHash;
use crate::types::schema::SchemaId;

/// `EncodeStruct(record)`: the ABI encoding of the record tuple on its own.
pub fn encode_struct(record: &NormalizedRecord) -> Vec<u8> {
    record.as_abi_tuple().abi_encode()
}

/// Step-wise accumulator for callers that stream records.
#[derive(Clone, Debug)]
pub struct HashChain {
    head: B256,
    absorbed: u64,
}

impl Default for HashChain {
    fn default() -> Self {
        Self::new()
    }
}

impl HashChain {
    pub fn new() -> Self {
        Self {
            head: ZERO_HASH,
            absorbed: 0,
        }
    }

    pub fn absorb(&mut self, schema: &SchemaId, record: &NormalizedRecord) {
        let preimage = (self.head, *schema, record.as_abi_tuple()).abi_encode_params();
        self.head = keccak256(&preimage);
        self.absorbed += 1;
    }

    pub fn absorbed(&self) -> u64 {
        self.absorbed
    }

    pub fn current(&self) -> VerificationHash {
        VerificationHash(self.head)
    }

    pub fn finish(self) -> VerificationHash {
        self.current()
    }
}

/// Folds the whole batch into its verification hash.
pub fn accumulate(batch: &Batch) -> VerificationHash {
    let mut chain = HashChain::new();
    for (schema, record) in batch.iter_records() {
        chain.absorb(schema, record);
    }
    debug!(records = chain.absorbed(), groups = batch.group_count(), "hash chain complete");
    chain.finish()
}

/// Packs then accumulates, as a verifier does with an encoded-attestations file.
pub fn accumulate_encoded(encoded: &[EncodedAttestation]) -> VerificationHash {
    accumulate(&pack(encoded))
}
