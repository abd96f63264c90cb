pub mod proof_tests;
pub mod verify_tests;

use alloy_primitives::{address, b256, Address, B256};

use crate::registry::SchemaRegistry;
use crate::types::attestation::DecodedAttestation;

pub(crate) const TOKEN_SCHEMA: B256 =
    b256!("a3866145ae39fb20263674414f85b97c7ed76424a9bccd4d7302bea7d668cda6");
pub(crate) const SUMMARY_SCHEMA: B256 =
    b256!("283113b00b913ca6657ea4b088f2b926a86f76712c31d6819fbd2335aa61d477");
pub(crate) const HOLDER: Address = address!("5a384227b65fa093dec03ec34e111db80a040615");

/// Registry holding the POAP token and event-summary layouts.
pub(crate) fn poap_registry() -> SchemaRegistry {
    let mut reg = SchemaRegistry::new();
    reg.insert(TOKEN_SCHEMA, "uint256 eventID, uint256 tokenID, uint64 created");
    reg.insert(SUMMARY_SCHEMA, "uint256 eventID, uint256 tokenCount");
    reg
}

pub(crate) fn token(event: u64, token: u64, created: u64, holder: Address) -> DecodedAttestation {
    DecodedAttestation::new(TOKEN_SCHEMA, Some(holder))
        .with("eventID", event)
        .with("tokenID", token)
        .with("created", created)
}

pub(crate) fn summary(event: u64, count: u64) -> DecodedAttestation {
    DecodedAttestation::new(SUMMARY_SCHEMA, None)
        .with("eventID", event)
        .with("tokenCount", count)
}
