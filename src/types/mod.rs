// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod attestation;
pub mod hash;
pub mod schema;
pub mod value;

pub use attestation::{Batch, BatchGroup, DecodedAttestation, EncodedAttestation, NormalizedRecord};
pub use hash::VerificationHash;
pub use schema::{AbiType, FieldSpec, SchemaId};
pub use value::AttestValue;
