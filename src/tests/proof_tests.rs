// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloy_primitives::Address;

use super::{poap_registry, summary, token, HOLDER};
use crate::config::PROOF_VERSION;
use crate::file::{read_encoded, write_encoded};
use crate::hashchain::accumulate_encoded;
use crate::proof::VerificationProof;
use crate::translate::translate;

#[test]
fn test_proof_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("encoded.json");
    let encoded = translate(
        &poap_registry(),
        &[token(5, 1, 10, HOLDER), summary(5, 1)],
    )
    .unwrap();
    write_encoded(&path, &encoded).unwrap();

    let proof = VerificationProof::from_file(&path).unwrap();
    assert_eq!(proof.version, PROOF_VERSION);
    assert_eq!(proof.group_count, 2);
    assert_eq!(proof.record_count, 2);
    assert_eq!(proof.verification_hash, accumulate_encoded(&encoded));
    assert!(proof.attester.is_none());

    let json = serde_json::to_string(&proof).unwrap();
    assert!(!json.contains("attester"));
    let back: VerificationProof = serde_json::from_str(&json).unwrap();
    assert_eq!(back, proof);
}

#[test]
fn test_reformatted_file_still_matches() {
    let dir = tempfile::tempdir().unwrap();
    let pretty = dir.path().join("pretty.json");
    let compact = dir.path().join("compact.json");

    let encoded = translate(&poap_registry(), &[token(5, 1, 10, HOLDER)]).unwrap();
    write_encoded(&pretty, &encoded).unwrap();
    std::fs::write(&compact, serde_json::to_string(&read_encoded(&pretty).unwrap()).unwrap()).unwrap();

    let a = VerificationProof::from_file(&pretty).unwrap();
    let b = VerificationProof::from_file(&compact)
        .unwrap()
        .with_attester(Address::repeat_byte(0x01));

    assert_ne!(a.attestations_hash, b.attestations_hash);
    assert!(a.matches(&b));
}
