// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Tagged attestation values.
//!
//! Generators emit loosely typed JSON (numbers, decimal strings, hex strings).
//! Values stay in this closed enum until the encoder coerces them against the
//! declared field type.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum AttestValue {
    Uint(U256),
    Bool(bool),
    Address(Address),
    Bytes(Vec<u8>),
    /// Textual input, interpreted according to the field type at encode time.
    Text(String),
}

impl AttestValue {
    pub fn kind(&self) -> &'static str {
        match self {
            AttestValue::Uint(_) => "integer",
            AttestValue::Bool(_) => "boolean",
            AttestValue::Address(_) => "address",
            AttestValue::Bytes(_) => "bytes",
            AttestValue::Text(_) => "text",
        }
    }
}

impl TryFrom<Value> for AttestValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(AttestValue::Bool(b)),
            Value::Number(n) => n
                .as_u64()
                .map(|n| AttestValue::Uint(U256::from(n)))
                .ok_or_else(|| format!("unsupported number {n}: only unsigned integers are accepted")),
            Value::String(s) => Ok(AttestValue::Text(s)),
            other => Err(format!("unsupported attestation value {other}")),
        }
    }
}

impl From<AttestValue> for Value {
    fn from(value: AttestValue) -> Self {
        match value {
            AttestValue::Uint(v) if v.bit_len() <= 64 => Value::from(v.as_limbs()[0]),
            AttestValue::Uint(v) => Value::String(v.to_string()),
            AttestValue::Bool(b) => Value::Bool(b),
            AttestValue::Address(a) => Value::String(a.to_checksum(None)),
            AttestValue::Bytes(b) => Value::String(format!("0x{}", hex::encode(b))),
            AttestValue::Text(s) => Value::String(s),
        }
    }
}

impl From<u64> for AttestValue {
    fn from(v: u64) -> Self {
        AttestValue::Uint(U256::from(v))
    }
}

impl From<U256> for AttestValue {
    fn from(v: U256) -> Self {
        AttestValue::Uint(v)
    }
}

impl From<bool> for AttestValue {
    fn from(v: bool) -> Self {
        AttestValue::Bool(v)
    }
}

impl From<Address> for AttestValue {
    fn from(v: Address) -> Self {
        AttestValue::Address(v)
    }
}

impl From<Vec<u8>> for AttestValue {
    fn from(v: Vec<u8>) -> Self {
        AttestValue::Bytes(v)
    }
}

impl From<&str> for AttestValue {
    fn from(v: &str) -> Self {
        AttestValue::Text(v.to_string())
    }
}

impl From<String> for AttestValue {
    fn from(v: String) -> Self {
        AttestValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_numbers_and_strings() {
        let v: AttestValue = serde_json::from_str("1000").unwrap();
        assert_eq!(v, AttestValue::from(1000u64));
        let v: AttestValue = serde_json::from_str("\"4312\"").unwrap();
        assert_eq!(v, AttestValue::Text("4312".into()));
        let v: AttestValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, AttestValue::Bool(true));
    }

    #[test]
    fn rejects_negative_and_structured_json() {
        assert!(serde_json::from_str::<AttestValue>("-1").is_err());
        assert!(serde_json::from_str::<AttestValue>("1.5").is_err());
        assert!(serde_json::from_str::<AttestValue>("null").is_err());
        assert!(serde_json::from_str::<AttestValue>("[1]").is_err());
    }

    #[test]
    fn wide_integers_serialize_as_decimal_strings() {
        let big = AttestValue::Uint(U256::MAX);
        let json = serde_json::to_value(&big).unwrap();
        assert_eq!(json, Value::String(U256::MAX.to_string()));
        let small = serde_json::to_value(AttestValue::from(7u64)).unwrap();
        assert_eq!(small, Value::from(7u64));
    }
}
