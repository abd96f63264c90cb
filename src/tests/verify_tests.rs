// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloy_primitives::{Address, B256};

use super::{poap_registry, summary, token, HOLDER};
use crate::error::{AttestError, MismatchReason};
use crate::hashchain::accumulate;
use crate::pack::pack;
use crate::translate::translate;
use crate::types::attestation::Batch;
use crate::types::hash::VerificationHash;
use crate::verify::{verify_batch, LedgerReader, LedgerState, StaticLedger};

const ATTESTER: Address = Address::repeat_byte(0xa7);

fn published_batch() -> Batch {
    let encoded = translate(
        &poap_registry(),
        &[token(9, 1, 100, HOLDER), token(9, 2, 200, HOLDER), summary(9, 2)],
    )
    .unwrap();
    pack(&encoded)
}

fn ledger(locked: bool, vhash: VerificationHash) -> StaticLedger {
    let mut ledger = StaticLedger::new();
    ledger.insert(ATTESTER, LedgerState { locked, vhash });
    ledger
}

#[test]
fn test_locked_and_matching() {
    let batch = published_batch();
    let ledger = ledger(true, accumulate(&batch));
    let outcome = verify_batch(&ledger, ATTESTER, &batch).unwrap();
    assert_eq!(outcome.attester, ATTESTER);
    assert_eq!(outcome.groups, 2);
    assert_eq!(outcome.records, 3);
}

#[test]
fn test_unlocked_fails_even_when_hash_matches() {
    let batch = published_batch();
    let ledger = ledger(false, accumulate(&batch));
    match verify_batch(&ledger, ATTESTER, &batch) {
        Err(AttestError::VerificationMismatch(MismatchReason::NotLocked)) => {}
        other => panic!("expected NotLocked, got {other:?}"),
    }
}

#[test]
fn test_tampered_copy_fails() {
    let batch = published_batch();
    let ledger = ledger(true, accumulate(&batch));

    let mut tampered = batch.clone();
    tampered.groups[0].records[1].recipient = Address::repeat_byte(0x66);

    match verify_batch(&ledger, ATTESTER, &tampered) {
        Err(AttestError::VerificationMismatch(MismatchReason::HashMismatch { expected, found })) => {
            assert_eq!(expected, accumulate(&batch));
            assert_eq!(found, accumulate(&tampered));
        }
        other => panic!("expected HashMismatch, got {other:?}"),
    }
}

#[test]
fn test_truncated_copy_fails() {
    let batch = published_batch();
    let ledger = ledger(true, accumulate(&batch));
    let mut truncated = batch.clone();
    truncated.groups.pop();
    assert!(verify_batch(&ledger, ATTESTER, &truncated).is_err());
}

#[test]
fn test_unknown_attester_is_a_ledger_error() {
    let batch = published_batch();
    let ledger = ledger(true, accumulate(&batch));
    let err = verify_batch(&ledger, Address::repeat_byte(0x01), &batch).unwrap_err();
    assert!(matches!(err, AttestError::Ledger(_)));
}

#[test]
fn test_ledger_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let original = ledger(true, VerificationHash(B256::repeat_byte(0x42)));
    original.save(&path).unwrap();

    let loaded = StaticLedger::load(&path).unwrap();
    assert_eq!(loaded, original);
    assert!(loaded.is_locked(&ATTESTER).unwrap());
    assert_eq!(
        loaded.verification_hash(&ATTESTER).unwrap(),
        VerificationHash(B256::repeat_byte(0x42))
    );
}
