// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use std::path::Path;
use atstdd_kernel::file::read_encoded;
use atstdd_kernel::{pack, Batch};

pub fn load_batch(attestations: &Path) -> anyhow::Result<Batch> {
    Ok(pack(&read_encoded(attestations)?))
}

pub fn run(attestations: &Path, json: bool) -> anyhow::Result<()> {
    let batch = load_batch(attestations)?;

    // The submission payload, verbatim.
    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Schema", "Records"]);

    for (i, group) in batch.groups.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            group.schema.to_string(),
            group.records.len().to_string(),
        ]);
    }

    println!("{table}");
    println!("{} groups, {} records", batch.group_count(), batch.record_count());
    Ok(())
}
