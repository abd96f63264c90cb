// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Offline verification against the ledger's stored commitment.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AttestError, MismatchReason, Result};
use crate::hashchain::accumulate;
use crate::types::attestation::Batch;
use crate::types::hash::VerificationHash;

/// Read path of the ledger collaborator.
///
/// Implementations own any network access and retry policy.
pub trait LedgerReader {
    fn is_locked(&self, attester: &Address) -> Result<bool>;
    fn verification_hash(&self, attester: &Address) -> Result<VerificationHash>;
}

/// What the ledger reports for one attester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub locked: bool,
    pub vhash: VerificationHash,
}

/// Ledger snapshot held in memory, keyed by attester address.
///
/// JSON form: `{ "0x<attester>": { "locked": true, "vhash": "0x..." } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticLedger {
    states: BTreeMap<Address, LedgerState>,
}

impl StaticLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attester: Address, state: LedgerState) {
        self.states.insert(attester, state);
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let entries: BTreeMap<String, LedgerState> = serde_json::from_str(&raw)?;
        let states = entries
            .into_iter()
            .map(|(addr, state)| {
                let addr = Address::from_str(&addr)
                    .map_err(|e| AttestError::Ledger(format!("invalid attester address \"{addr}\": {e}")))?;
                Ok((addr, state))
            })
            .collect::<Result<_>>()?;
        Ok(Self { states })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let entries: BTreeMap<String, &LedgerState> = self
            .states
            .iter()
            .map(|(addr, state)| (addr.to_checksum(None), state))
            .collect();
        let json = serde_json::to_string_pretty(&entries)?;
        crate::file::write_atomic(path.as_ref(), json.as_bytes())
    }

    fn state(&self, attester: &Address) -> Result<&LedgerState> {
        self.states
            .get(attester)
            .ok_or_else(|| AttestError::Ledger(format!("no attester deployed at {attester}")))
    }
}

impl LedgerReader for StaticLedger {
    fn is_locked(&self, attester: &Address) -> Result<bool> {
        Ok(self.state(attester)?.locked)
    }

    fn verification_hash(&self, attester: &Address) -> Result<VerificationHash> {
        Ok(self.state(attester)?.vhash)
    }
}

/// Successful verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub attester: Address,
    pub vhash: VerificationHash,
    pub groups: usize,
    pub records: usize,
}

/// Checks that `attester` is locked and that its stored hash equals the hash
/// recomputed from `batch`.
///
/// An unlocked attester fails even when the hashes agree.
pub fn verify_batch<R: LedgerReader + ?Sized>(
    ledger: &R,
    attester: Address,
    batch: &Batch,
) -> Result<VerificationOutcome> {
    if !ledger.is_locked(&attester)? {
        warn!(%attester, "attester is not locked");
        return Err(AttestError::VerificationMismatch(MismatchReason::NotLocked));
    }

    let found = accumulate(batch);
    let expected = ledger.verification_hash(&attester)?;
    if found != expected {
        warn!(%attester, %expected, %found, "verification hash mismatch");
        return Err(AttestError::VerificationMismatch(MismatchReason::HashMismatch {
            expected,
            found,
        }));
    }

    info!(%attester, vhash = %found, records = batch.record_count(), "verification successful");
    Ok(VerificationOutcome {
        attester,
        vhash: found,
        groups: batch.group_count(),
        records: batch.record_count(),
    })
}
