// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! atstdd-kernel: canonical attestation encoding, schema-grouped packing, and
//! the verification hash chain that lets anyone check a published batch offline.
//!
//! Pipeline: decoded attestations -> [`translate`] -> encoded attestations ->
//! [`pack`] -> batch -> [`accumulate`] -> verification hash.

pub mod address;
pub mod config;
pub mod encoder;
pub mod error;
pub mod file;
pub mod hashchain;
pub mod pack;
pub mod proof;
pub mod registry;
pub mod translate;
pub mod types;
pub mod verify;

pub use error::{AttestError, MismatchReason, Result};
pub use hashchain::{accumulate, accumulate_encoded, HashChain};
pub use pack::pack;
pub use registry::{SchemaLookup, SchemaRegistry};
pub use translate::translate;
pub use types::*;
pub use verify::{verify_batch, LedgerReader, LedgerState, StaticLedger};

#[cfg(test)]
pub mod tests;
