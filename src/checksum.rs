//! Four-leaf modular checksum tree
//!
//! Aggregates four values into a single root by reducing each leaf mod K,
//! adding adjacent pairs, and adding the two pair sums, reducing at every
//! level. Purely a toy aggregation helper; it shares nothing with the
//! cipher engines beyond living in the same teaching library.

use crate::error::{CipherError, Result};

/// Compute the root of the two-level checksum tree over exactly four leaves
pub fn tree_root(leaves: &[u64; 4], modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(CipherError::Domain("modulus must be positive".to_string()));
    }

    let modulus = u128::from(modulus);
    let base = leaves.map(|leaf| u128::from(leaf) % modulus);
    let left = (base[0] + base[1]) % modulus;
    let right = (base[2] + base[3]) % modulus;

    Ok(((left + right) % modulus) as u64)
}
