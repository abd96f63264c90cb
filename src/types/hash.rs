// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use core::fmt;
use core::str::FromStr;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Running digest committing an ordered batch of attestations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationHash(pub B256);

impl VerificationHash {
    pub const ZERO: VerificationHash = VerificationHash(B256::ZERO);

    pub fn as_b256(&self) -> &B256 {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0 .0
    }
}

impl From<B256> for VerificationHash {
    fn from(h: B256) -> Self {
        VerificationHash(h)
    }
}

impl From<[u8; 32]> for VerificationHash {
    fn from(h: [u8; 32]) -> Self {
        VerificationHash(B256::from(h))
    }
}

impl fmt::Display for VerificationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for VerificationHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut out = [0u8; 32];
        hex::decode_to_slice(s, &mut out)?;
        Ok(VerificationHash::from(out))
    }
}
