// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use anyhow::Context;
use atstdd_kernel::file::{read_decoded, write_encoded};
use atstdd_kernel::{translate, SchemaRegistry};
use tracing::info;

pub fn run(input: &Path, schemas: &Path, output: &Path) -> anyhow::Result<()> {
    let decoded = read_decoded(input)
        .with_context(|| format!("Failed to read decoded attestations from {}", input.display()))?;
    let registry = SchemaRegistry::load(schemas)
        .with_context(|| format!("Failed to load schemas from {}", schemas.display()))?;

    let encoded = translate(&registry, &decoded)?;
    write_encoded(output, &encoded)?;

    info!(count = encoded.len(), path = %output.display(), "attestations encoded");
    println!("Encoded {} attestations -> {}", encoded.len(), output.display());
    Ok(())
}
