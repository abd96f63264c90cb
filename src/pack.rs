// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Schema-grouped batch packing.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::types::attestation::{Batch, BatchGroup, EncodedAttestation, NormalizedRecord};
use crate::types::schema::SchemaId;

/// Groups attestations by schema in first-seen order and fills every record
/// field with its fixed default.
///
/// Groups are never re-sorted; within a group records keep input order.
pub fn pack(encoded: &[EncodedAttestation]) -> Batch {
    let mut index: FxHashMap<SchemaId, usize> = FxHashMap::default();
    let mut groups: Vec<BatchGroup> = Vec::new();

    for attestation in encoded {
        let slot = *index.entry(attestation.schema).or_insert_with(|| {
            debug!(schema = %attestation.schema, group = groups.len(), "opening batch group");
            groups.push(BatchGroup {
                schema: attestation.schema,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(NormalizedRecord::from_encoded(attestation));
    }

    Batch { groups }
}
