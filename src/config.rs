// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants and the per-chain address book.

use alloy_primitives::{address, Address, B256};

use crate::error::{AttestError, Result};

/// Seed of the verification hash chain.
pub const ZERO_HASH: B256 = B256::ZERO;

/// Version stamped into verification proofs.
pub const PROOF_VERSION: u32 = 1;

/// Deterministic deployment proxy used to place the factory and the reference attester.
pub const DETERMINISTIC_DEPLOYER: Address = address!("4e59b44847b379578588920ca78fbf26c0b4956c");

/// Published `VerifiableAttesterFactory` address.
pub const FACTORY: Address = address!("90991F301b2e076dC6Bc6F4942f97b3c71Ba92b2");

/// Contract name hashed into the factory's deployment salt.
pub const FACTORY_CONTRACT_NAME: &str = "VerifiableAttesterFactory";

/// Chain id -> contract address.
pub type AddressBook = &'static [(u64, Address)];

/// EAS contract addresses.
pub const EAS: AddressBook = &[(420, address!("a3f2188bc25682453fc0414df7f8d872a0ee5efa"))];

/// Resolves a contract address: an explicitly supplied one wins, otherwise the
/// book entry for `chain_id`.
pub fn resolve(book: AddressBook, chain_id: Option<u64>, supplied: Option<Address>) -> Result<Address> {
    if let Some(addr) = supplied {
        return Ok(addr);
    }
    let chain_id = chain_id.ok_or_else(|| {
        AttestError::Config("no chain id configured, must supply address manually".into())
    })?;
    book.iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, addr)| *addr)
        .ok_or_else(|| {
            AttestError::Config(format!(
                "contract not found for chain id {chain_id}, must supply manually"
            ))
        })
}
