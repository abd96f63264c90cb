// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use atstdd_kernel::{accumulate, VerificationHash};

use super::pack::load_batch;

pub fn compute(attestations: &Path) -> anyhow::Result<VerificationHash> {
    Ok(accumulate(&load_batch(attestations)?))
}

pub fn run(attestations: &Path) -> anyhow::Result<()> {
    println!("{}", compute(attestations)?);
    Ok(())
}
