// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Attestation records at each pipeline stage.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::types::schema::SchemaId;
use crate::types::value::AttestValue;

/// Generator output: schema id, optional recipient, and named field values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedAttestation {
    pub schema: SchemaId,
    /// `None` for facts about the collection as a whole.
    pub recipient: Option<Address>,
    pub data: BTreeMap<String, AttestValue>,
}

impl DecodedAttestation {
    pub fn new(schema: SchemaId, recipient: Option<Address>) -> Self {
        Self {
            schema,
            recipient,
            data: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttestValue>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }
}

/// One entry of the encoded-attestations file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedAttestation {
    pub schema: SchemaId,
    pub recipient: Option<Address>,
    /// Canonical encoding of all fields in schema order.
    pub data: Bytes,
}

/// Tuple form of a [`NormalizedRecord`], encodable with `alloy_sol_types::SolValue`.
pub type RecordTuple = (Address, u64, bool, B256, Bytes, U256);

/// Submission/hashing form of one attestation. Every field carries a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub recipient: Address,
    pub expiration_time: u64,
    pub revocable: bool,
    #[serde(rename = "refUID")]
    pub ref_uid: B256,
    pub data: Bytes,
    pub value: U256,
}

impl NormalizedRecord {
    pub fn from_encoded(attestation: &EncodedAttestation) -> Self {
        Self {
            recipient: attestation.recipient.unwrap_or(Address::ZERO),
            expiration_time: 0,
            revocable: false,
            ref_uid: B256::ZERO,
            data: attestation.data.clone(),
            value: U256::ZERO,
        }
    }

    /// ABI shape of the on-chain `AttestationRequestData` struct:
    /// (address,uint64,bool,bytes32,bytes,uint256)
    /// = (recipient,expirationTime,revocable,refUID,data,value)
    pub fn as_abi_tuple(&self) -> RecordTuple {
        (
            self.recipient,
            self.expiration_time,
            self.revocable,
            self.ref_uid,
            self.data.clone(),
            self.value,
        )
    }
}

/// All records sharing one schema, in encounter order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchGroup {
    pub schema: SchemaId,
    #[serde(rename = "data")]
    pub records: Vec<NormalizedRecord>,
}

/// Schema-grouped submission, serialized as `[{schema, data: [...]}]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    pub groups: Vec<BatchGroup>,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    /// (schema, record) pairs in commitment order.
    pub fn iter_records(&self) -> impl Iterator<Item = (&SchemaId, &NormalizedRecord)> {
        self.groups
            .iter()
            .flat_map(|g| g.records.iter().map(move |r| (&g.schema, r)))
    }

    /// Flattens back into file entries in batch order. The zero recipient maps to `None`.
    pub fn unpack(&self) -> Vec<EncodedAttestation> {
        self.iter_records()
            .map(|(schema, record)| EncodedAttestation {
                schema: *schema,
                recipient: (record.recipient != Address::ZERO).then_some(record.recipient),
                data: record.data.clone(),
            })
            .collect()
    }
}
