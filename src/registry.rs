// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Schema lookup collaborator.
//!
//! The on-chain SchemaRegistry is reached by callers; the pipeline only sees
//! this synchronous trait. A file-backed registry covers offline use.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;

use crate::error::{AttestError, Result};
use crate::types::schema::{parse_schema, schema_uid, FieldSpec, SchemaId};

/// Resolves a schema id to its field layout.
pub trait SchemaLookup {
    fn lookup(&self, schema: &SchemaId) -> Result<Vec<FieldSpec>>;
}

impl<F> SchemaLookup for F
where
    F: Fn(&SchemaId) -> Result<Vec<FieldSpec>>,
{
    fn lookup(&self, schema: &SchemaId) -> Result<Vec<FieldSpec>> {
        self(schema)
    }
}

/// Schema id -> EAS schema string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemas: BTreeMap<SchemaId, String>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema` under its EAS UID and returns the UID.
    pub fn register(&mut self, schema: &str, resolver: Address, revocable: bool) -> SchemaId {
        let uid = schema_uid(schema, resolver, revocable);
        self.schemas.insert(uid, schema.to_string());
        uid
    }

    /// Registers `schema` under an externally assigned id.
    pub fn insert(&mut self, uid: SchemaId, schema: impl Into<String>) {
        self.schemas.insert(uid, schema.into());
    }

    pub fn get(&self, uid: &SchemaId) -> Option<&str> {
        self.schemas.get(uid).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Reads `{ "0x<uid>": "<schema>" }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw)?;
        let schemas = entries
            .into_iter()
            .map(|(uid, schema)| {
                let uid = SchemaId::from_str(&uid)
                    .map_err(|e| AttestError::Config(format!("invalid schema id \"{uid}\": {e}")))?;
                Ok((uid, schema))
            })
            .collect::<Result<_>>()?;
        Ok(Self { schemas })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let entries: BTreeMap<String, &String> = self
            .schemas
            .iter()
            .map(|(uid, schema)| (format!("0x{}", hex::encode(uid)), schema))
            .collect();
        let json = serde_json::to_string_pretty(&entries)?;
        crate::file::write_atomic(path.as_ref(), json.as_bytes())
    }
}

impl SchemaLookup for SchemaRegistry {
    fn lookup(&self, schema: &SchemaId) -> Result<Vec<FieldSpec>> {
        let raw = self.get(schema).ok_or_else(|| AttestError::SchemaResolution {
            schema: *schema,
            reason: "schema not found".into(),
        })?;
        parse_schema(raw)
    }
}
