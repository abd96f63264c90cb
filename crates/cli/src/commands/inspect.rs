// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use std::path::Path;
use atstdd_kernel::file::read_encoded;
use atstdd_kernel::translate::EncoderCache;
use atstdd_kernel::SchemaRegistry;

/// Decodes every encoded attestation back into named fields for review.
pub fn run(attestations: &Path, schemas: &Path) -> anyhow::Result<()> {
    let encoded = read_encoded(attestations)?;
    let registry = SchemaRegistry::load(schemas)?;
    let mut cache = EncoderCache::new();

    println!("\nAttestations Report");
    println!("-------------------");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Schema", "Recipient", "Status", "Fields"]);

    let mut failures = 0usize;
    for (i, att) in encoded.iter().enumerate() {
        let recipient = att
            .recipient
            .map(|r| r.to_checksum(None))
            .unwrap_or_else(|| "-".to_string());

        let decoded = cache
            .resolve(&registry, &att.schema)
            .and_then(|encoder| encoder.decode(&att.data));

        match decoded {
            Ok(fields) => {
                let rendered = fields
                    .into_iter()
                    .map(|(name, value)| format!("{name}={}", serde_json::Value::from(value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                table.add_row(vec![i.to_string(), att.schema.to_string(), recipient, "OK".into(), rendered]);
            }
            Err(e) => {
                failures += 1;
                table.add_row(vec![i.to_string(), att.schema.to_string(), recipient, "CORRUPT".into(), e.to_string()]);
            }
        }
    }

    println!("{table}");
    println!("{} attestations, {} undecodable", encoded.len(), failures);
    Ok(())
}
