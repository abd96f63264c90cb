// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Schema layouts: field types, field specs, and EAS schema identifiers.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;

use alloy_dyn_abi::DynSolType;
use alloy_primitives::{keccak256, Address, B256};
use serde::{Deserialize, Serialize};

use crate::error::{AttestError, Result};

/// 32-byte content identifier of a schema. Opaque to the pipeline.
pub type SchemaId = B256;

/// Primitive field types a schema may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AbiType {
    /// `uint<bits>`, bits in 8..=256 and a multiple of 8.
    Uint(u16),
    Bool,
    Address,
    /// `bytes<len>`, len in 1..=32.
    FixedBytes(u8),
    Bytes,
    String,
}

impl AbiType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bool" => return Some(AbiType::Bool),
            "address" => return Some(AbiType::Address),
            "bytes" => return Some(AbiType::Bytes),
            "string" => return Some(AbiType::String),
            "uint" => return Some(AbiType::Uint(256)),
            _ => {}
        }
        if let Some(bits) = s.strip_prefix("uint") {
            let bits: u16 = decimal_suffix(bits)?;
            if bits == 0 || bits > 256 || bits % 8 != 0 {
                return None;
            }
            return Some(AbiType::Uint(bits));
        }
        if let Some(len) = s.strip_prefix("bytes") {
            let len: u8 = decimal_suffix(len)?;
            if len == 0 || len > 32 {
                return None;
            }
            return Some(AbiType::FixedBytes(len));
        }
        None
    }
}

/// Canonical width suffix: ASCII digits only, no sign, no leading zero.
fn decimal_suffix<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) || s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

impl From<AbiType> for DynSolType {
    fn from(ty: AbiType) -> Self {
        match ty {
            AbiType::Uint(bits) => DynSolType::Uint(bits as usize),
            AbiType::Bool => DynSolType::Bool,
            AbiType::Address => DynSolType::Address,
            AbiType::FixedBytes(len) => DynSolType::FixedBytes(len as usize),
            AbiType::Bytes => DynSolType::Bytes,
            AbiType::String => DynSolType::String,
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Uint(bits) => write!(f, "uint{bits}"),
            AbiType::Bool => f.write_str("bool"),
            AbiType::Address => f.write_str("address"),
            AbiType::FixedBytes(len) => write!(f, "bytes{len}"),
            AbiType::Bytes => f.write_str("bytes"),
            AbiType::String => f.write_str("string"),
        }
    }
}

impl TryFrom<String> for AbiType {
    type Error = String;

    fn try_from(s: String) -> core::result::Result<Self, Self::Error> {
        AbiType::parse(&s).ok_or_else(|| format!("unsupported type \"{s}\""))
    }
}

impl From<AbiType> for String {
    fn from(ty: AbiType) -> Self {
        ty.to_string()
    }
}

/// One row of a schema's field layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: AbiType,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: AbiType) -> Self {
        Self { name: name.into(), ty }
    }
}

/// Parses an EAS schema string such as `"uint256 eventID, uint256 tokenID, uint64 created"`.
pub fn parse_schema(schema: &str) -> Result<Vec<FieldSpec>> {
    let schema = schema.trim();
    if schema.is_empty() {
        return Ok(Vec::new());
    }

    let mut fields = Vec::new();
    let mut seen = BTreeSet::new();
    for fragment in schema.split(',') {
        let mut parts = fragment.split_whitespace();
        let (ty, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(ty), Some(name), None) => (ty, name),
            _ => {
                return Err(AttestError::encoding(
                    fragment.trim(),
                    "expected \"<type> <name>\"",
                ))
            }
        };
        let ty = AbiType::parse(ty)
            .ok_or_else(|| AttestError::encoding(name, format!("unsupported type \"{ty}\"")))?;
        if !seen.insert(name) {
            return Err(AttestError::encoding(name, "duplicate field name"));
        }
        fields.push(FieldSpec::new(name, ty));
    }
    Ok(fields)
}

/// Renders a field layout back into EAS schema string form.
pub fn format_schema(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.ty, f.name))
        .collect::<Vec<_>>()
        .join(",")
}

/// EAS schema UID: `keccak256(schema ‖ resolver ‖ revocable)`.
pub fn schema_uid(schema: &str, resolver: Address, revocable: bool) -> SchemaId {
    let mut buf = Vec::with_capacity(schema.len() + 21);
    buf.extend_from_slice(schema.as_bytes());
    buf.extend_from_slice(resolver.as_slice());
    buf.push(revocable as u8);
    keccak256(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_poap_token_schema() {
        let fields = parse_schema("uint256 eventID, uint256 tokenID, uint64 created").unwrap();
        assert_eq!(
            fields,
            vec![
                FieldSpec::new("eventID", AbiType::Uint(256)),
                FieldSpec::new("tokenID", AbiType::Uint(256)),
                FieldSpec::new("created", AbiType::Uint(64)),
            ]
        );
        assert_eq!(format_schema(&fields), "uint256 eventID,uint256 tokenID,uint64 created");
    }

    #[test]
    fn type_names() {
        assert_eq!(AbiType::parse("uint"), Some(AbiType::Uint(256)));
        assert_eq!(AbiType::parse("uint8"), Some(AbiType::Uint(8)));
        assert_eq!(AbiType::parse("bytes32"), Some(AbiType::FixedBytes(32)));
        assert_eq!(AbiType::parse("uint7"), None);
        assert_eq!(AbiType::parse("uint264"), None);
        assert_eq!(AbiType::parse("uint08"), None);
        assert_eq!(AbiType::parse("bytes33"), None);
        assert_eq!(AbiType::parse("int256"), None);
        assert_eq!(AbiType::parse("address[]"), None);
        assert_eq!(AbiType::parse("uint+64"), None);
        assert_eq!(AbiType::parse("bytes+4"), None);
        assert_eq!(AbiType::parse("uint 8"), None);
        assert_eq!(AbiType::parse("bytes04"), None);
    }

    #[test]
    fn dyn_types_match_solidity_names() {
        for name in ["uint64", "uint256", "bool", "address", "bytes4", "bytes", "string"] {
            let ty = AbiType::parse(name).unwrap();
            assert_eq!(DynSolType::from(ty), DynSolType::parse(name).unwrap());
        }
    }

    #[test]
    fn rejects_malformed_schemas() {
        assert!(parse_schema("uint256").is_err());
        assert!(parse_schema("uint256 a b").is_err());
        assert!(parse_schema("int256 delta").is_err());
        match parse_schema("uint256 id, bool id") {
            Err(AttestError::Encoding { field, .. }) => assert_eq!(field, "id"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn empty_schema_has_no_fields() {
        assert!(parse_schema("  ").unwrap().is_empty());
    }

    #[test]
    fn schema_uid_matches_eas_derivation() {
        let uid = schema_uid(
            "uint256 eventID,uint256 tokenID,uint64 created",
            Address::ZERO,
            true,
        );
        assert_eq!(
            hex::encode(uid),
            "3db646142a02cde127b630e9e257f638bfbb1e07cb7188aad82de5bde4c52bf6"
        );
        let not_revocable = schema_uid(
            "uint256 eventID,uint256 tokenID,uint64 created",
            Address::ZERO,
            false,
        );
        assert_eq!(
            hex::encode(not_revocable),
            "620fe35e17c47ff90744cabac90d37a81dc1e4f646dbc7433b1140d6940c5607"
        );
    }

    #[test]
    fn field_spec_json_shape() {
        let spec = FieldSpec::new("created", AbiType::Uint(64));
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"name":"created","type":"uint64"}"#);
        let back: FieldSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
