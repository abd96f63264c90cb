// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Content-addressed (CREATE2) deployment addresses.
//!
//! Lets any party locate the attester for "collection X under EAS instance Y"
//! from fixed bytecode alone, without a directory service.

use alloy_primitives::{keccak256, Address, B256};
use alloy_sol_types::SolValue;

use crate::config::FACTORY_CONTRACT_NAME;

/// Last 20 bytes of `keccak256(0xff ‖ deployer ‖ salt ‖ init_code_hash)`.
pub fn create2_address(deployer: Address, salt: B256, init_code_hash: B256) -> Address {
    let mut preimage = [0u8; 1 + 20 + 32 + 32];
    preimage[0] = 0xff;
    preimage[1..21].copy_from_slice(deployer.as_slice());
    preimage[21..53].copy_from_slice(salt.as_slice());
    preimage[53..85].copy_from_slice(init_code_hash.as_slice());
    Address::from_slice(&keccak256(preimage)[12..])
}

pub fn derive_factory_address(deployer: Address, salt: B256, factory_init_code_hash: B256) -> Address {
    create2_address(deployer, salt, factory_init_code_hash)
}

/// `keccak256(init_code ‖ constructor_args)`
pub fn init_code_hash(init_code: &[u8], constructor_args: &[u8]) -> B256 {
    let mut buf = Vec::with_capacity(init_code.len() + constructor_args.len());
    buf.extend_from_slice(init_code);
    buf.extend_from_slice(constructor_args);
    keccak256(&buf)
}

/// Address of an instance the factory creates with a zero salt.
pub fn derive_instance_address(factory: Address, init_code: &[u8], constructor_args: &[u8]) -> Address {
    create2_address(factory, B256::ZERO, init_code_hash(init_code, constructor_args))
}

/// Salt used by the deterministic deployment scripts: `keccak256(name)`.
pub fn deployment_salt(contract_name: &str) -> B256 {
    keccak256(contract_name.as_bytes())
}

/// `abi.encode(address eas, string name)`
pub fn attester_constructor_args(eas: Address, name: &str) -> Vec<u8> {
    (eas, name.to_string()).abi_encode_params()
}

/// Address of the attester for collection `name` under `eas`.
pub fn predict_attester(factory: Address, attester_bytecode: &[u8], eas: Address, name: &str) -> Address {
    derive_instance_address(factory, attester_bytecode, &attester_constructor_args(eas, name))
}

/// Address `deployer` places the factory at for `factory_bytecode`.
pub fn predict_factory(deployer: Address, factory_bytecode: &[u8]) -> Address {
    derive_factory_address(
        deployer,
        deployment_salt(FACTORY_CONTRACT_NAME),
        keccak256(factory_bytecode),
    )
}
