// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use core::fmt;

use thiserror::Error;

use crate::types::hash::VerificationHash;
use crate::types::schema::SchemaId;

/// Why a verification run did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchReason {
    /// The attester still accepts attestations, so its hash is not final.
    NotLocked,
    /// The recomputed hash differs from the one stored on the ledger.
    HashMismatch {
        expected: VerificationHash,
        found: VerificationHash,
    },
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchReason::NotLocked => write!(f, "contract not locked"),
            MismatchReason::HashMismatch { expected, found } => write!(
                f,
                "verification hash mismatch: ledger has {expected}, computed {found}"
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum AttestError {
    #[error("required key \"{0}\" not supplied")]
    MissingField(String),

    #[error("unable to resolve schema {schema}: {reason}")]
    SchemaResolution { schema: SchemaId, reason: String },

    #[error("cannot encode field \"{field}\": {reason}")]
    Encoding { field: String, reason: String },

    #[error("verification failed: {0}")]
    VerificationMismatch(MismatchReason),

    #[error("ledger query failed: {0}")]
    Ledger(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AttestError {
    pub(crate) fn encoding(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AttestError::Encoding {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttestError>;
