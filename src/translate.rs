// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Decoded -> encoded attestation translation.

use std::collections::hash_map::Entry;

use alloy_primitives::Bytes;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::encoder::SchemaEncoder;
use crate::error::Result;
use crate::registry::SchemaLookup;
use crate::types::attestation::{DecodedAttestation, EncodedAttestation};
use crate::types::schema::SchemaId;

/// Encoders resolved during a single [`translate`] call.
///
/// Owned by that call and dropped with it; never shared between batches.
#[derive(Debug, Default)]
pub struct EncoderCache {
    encoders: FxHashMap<SchemaId, SchemaEncoder>,
    lookups: usize,
}

impl EncoderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the encoder for `schema`, asking `lookup` only on first use.
    pub fn resolve<L: SchemaLookup + ?Sized>(
        &mut self,
        lookup: &L,
        schema: &SchemaId,
    ) -> Result<&SchemaEncoder> {
        match self.encoders.entry(*schema) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                debug!(%schema, "resolving schema");
                let fields = lookup.lookup(schema)?;
                self.lookups += 1;
                Ok(e.insert(SchemaEncoder::new(fields)))
            }
        }
    }

    /// Number of external lookups performed so far.
    pub fn lookups(&self) -> usize {
        self.lookups
    }
}

/// Encodes every attestation against its schema layout, preserving input order.
///
/// Fails on the first unresolvable schema or malformed record; nothing is
/// returned in that case.
pub fn translate<L: SchemaLookup + ?Sized>(
    lookup: &L,
    attestations: &[DecodedAttestation],
) -> Result<Vec<EncodedAttestation>> {
    let mut cache = EncoderCache::new();
    let encoded = attestations
        .iter()
        .map(|attestation| {
            let encoder = cache.resolve(lookup, &attestation.schema)?;
            Ok(EncodedAttestation {
                schema: attestation.schema,
                recipient: attestation.recipient,
                data: Bytes::from(encoder.encode(&attestation.data)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        attestations = encoded.len(),
        schemas = cache.lookups(),
        "translated attestations"
    );
    Ok(encoded)
}
