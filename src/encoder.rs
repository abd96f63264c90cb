// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical record encoding from a schema layout.

use std::collections::BTreeMap;
use std::str::FromStr;

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{Address, B256, U256};

use crate::error::{AttestError, Result};
use crate::types::schema::{parse_schema, AbiType, FieldSpec};
use crate::types::value::AttestValue;

/// Encoder bound to one schema layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaEncoder {
    fields: Vec<FieldSpec>,
}

impl SchemaEncoder {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Builds an encoder from an EAS schema string.
    pub fn parse(schema: &str) -> Result<Self> {
        Ok(Self::new(parse_schema(schema)?))
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn encode(&self, values: &BTreeMap<String, AttestValue>) -> Result<Vec<u8>> {
        encode_record(&self.fields, values)
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<(String, AttestValue)>> {
        decode_record(&self.fields, data)
    }
}

/// Encodes `values` in `fields` order. Every field must be present; keys the
/// layout does not name are ignored.
pub fn encode_record(fields: &[FieldSpec], values: &BTreeMap<String, AttestValue>) -> Result<Vec<u8>> {
    let values = fields
        .iter()
        .map(|field| {
            let value = values
                .get(&field.name)
                .ok_or_else(|| AttestError::MissingField(field.name.clone()))?;
            coerce(field, value)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DynSolValue::Tuple(values).abi_encode_params())
}

/// Inverse of [`encode_record`]. Only canonical encodings are accepted.
pub fn decode_record(fields: &[FieldSpec], data: &[u8]) -> Result<Vec<(String, AttestValue)>> {
    let layout = DynSolType::Tuple(fields.iter().map(|f| DynSolType::from(f.ty)).collect());
    let decoded = layout
        .abi_decode_params(data)
        .map_err(|e| AttestError::encoding("<record>", e.to_string()))?;
    if decoded.abi_encode_params() != data {
        return Err(AttestError::encoding("<record>", "non-canonical encoding"));
    }
    let DynSolValue::Tuple(values) = decoded else {
        return Err(AttestError::encoding("<record>", "expected a parameter list"));
    };

    fields
        .iter()
        .zip(values)
        .map(|(field, value)| {
            let name = field.name.as_str();
            let value = match value {
                DynSolValue::Uint(v, bits) => {
                    check_width(name, bits, v)?;
                    AttestValue::Uint(v)
                }
                DynSolValue::Bool(b) => AttestValue::Bool(b),
                DynSolValue::Address(a) => AttestValue::Address(a),
                DynSolValue::FixedBytes(word, len) => AttestValue::Bytes(word[..len].to_vec()),
                DynSolValue::Bytes(b) => AttestValue::Bytes(b),
                DynSolValue::String(s) => AttestValue::Text(s),
                other => {
                    return Err(AttestError::encoding(name, format!("unexpected value {other:?}")))
                }
            };
            Ok((field.name.clone(), value))
        })
        .collect()
}

fn parse_hex(field: &str, s: &str) -> Result<Vec<u8>> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| AttestError::encoding(field, format!("expected 0x-prefixed hex, got \"{s}\"")))?;
    hex::decode(digits).map_err(|e| AttestError::encoding(field, format!("invalid hex \"{s}\": {e}")))
}

fn coerce(field: &FieldSpec, value: &AttestValue) -> Result<DynSolValue> {
    let name = field.name.as_str();
    let mismatch = || {
        AttestError::encoding(name, format!("{} value cannot encode as {}", value.kind(), field.ty))
    };

    match (field.ty, value) {
        (AbiType::Uint(bits), AttestValue::Uint(v)) => uint(name, bits, *v),
        (AbiType::Uint(bits), AttestValue::Text(s)) => {
            let v = U256::from_str(s.trim())
                .map_err(|e| AttestError::encoding(name, format!("invalid integer \"{s}\": {e}")))?;
            uint(name, bits, v)
        }
        (AbiType::Bool, AttestValue::Bool(b)) => Ok(DynSolValue::Bool(*b)),
        (AbiType::Address, AttestValue::Address(a)) => Ok(DynSolValue::Address(*a)),
        (AbiType::Address, AttestValue::Text(s)) => Address::from_str(s.trim())
            .map(DynSolValue::Address)
            .map_err(|e| AttestError::encoding(name, format!("invalid address \"{s}\": {e}"))),
        (AbiType::FixedBytes(len), AttestValue::Bytes(b)) => fixed_bytes(name, len, b),
        (AbiType::FixedBytes(len), AttestValue::Text(s)) => fixed_bytes(name, len, &parse_hex(name, s)?),
        (AbiType::Bytes, AttestValue::Bytes(b)) => Ok(DynSolValue::Bytes(b.clone())),
        (AbiType::Bytes, AttestValue::Text(s)) => Ok(DynSolValue::Bytes(parse_hex(name, s)?)),
        (AbiType::String, AttestValue::Text(s)) => Ok(DynSolValue::String(s.clone())),
        _ => Err(mismatch()),
    }
}

fn check_width(name: &str, bits: usize, v: U256) -> Result<()> {
    if v.bit_len() > bits {
        return Err(AttestError::encoding(name, format!("value {v} does not fit in uint{bits}")));
    }
    Ok(())
}

fn uint(name: &str, bits: u16, v: U256) -> Result<DynSolValue> {
    check_width(name, bits as usize, v)?;
    Ok(DynSolValue::Uint(v, bits as usize))
}

fn fixed_bytes(name: &str, len: u8, b: &[u8]) -> Result<DynSolValue> {
    let len = len as usize;
    if b.len() != len {
        return Err(AttestError::encoding(
            name,
            format!("expected {len} bytes for bytes{len}, got {}", b.len()),
        ));
    }
    let mut word = B256::ZERO;
    word[..len].copy_from_slice(b);
    Ok(DynSolValue::FixedBytes(word, len))
}
