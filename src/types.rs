//! Core types shared by the cipher engines

use num_bigint::BigUint;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ElGamal ciphertext block: the pair (c1, c2) produced for one plaintext
/// block with its own ephemeral secret.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ciphertext {
    pub(crate) c1: BigUint,
    pub(crate) c2: BigUint,
}

impl Ciphertext {
    /// Create a new ciphertext block
    pub fn new(c1: BigUint, c2: BigUint) -> Self {
        Ciphertext { c1, c2 }
    }

    /// Get the first component, G^k mod P
    pub fn c1(&self) -> &BigUint {
        &self.c1
    }

    /// Get the second component, m * Y^k mod P
    pub fn c2(&self) -> &BigUint {
        &self.c2
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.c1, self.c2)
    }
}
