//! Error types for the cipher library

use num_bigint::BigUint;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("unsupported character {0:?} (alphabet is A-Z and space)")]
    UnsupportedCharacter(char),

    #[error("ephemeral secret count {secrets} does not match block count {blocks}")]
    LengthMismatch { blocks: usize, secrets: usize },

    #[error("domain error: {0}")]
    Domain(String),

    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: BigUint, modulus: BigUint },

    #[error("key mismatch: {0}")]
    KeyMismatch(String),
}
