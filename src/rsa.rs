//! RSA encryption and decryption over numeric message blocks
//!
//! Key layering is a fixed protocol convention, not something discovered
//! from the ciphertext: encryption applies the sender exponent first and
//! the receiver exponent second, and decryption undoes the two layers in
//! exactly the reverse order.

use num_bigint::BigUint;

use crate::arith::mod_exp;
use crate::codec;
use crate::error::{CipherError, Result};
use crate::keys::RsaPublicKey;

/// RSA cipher engine bound to a sender public key (P, Q, E)
#[derive(Clone, Debug)]
pub struct Rsa {
    pub public_key: RsaPublicKey,
}

impl Rsa {
    /// Create a new engine for the given sender public key
    pub fn new(public_key: RsaPublicKey) -> Self {
        Rsa { public_key }
    }

    /// Encrypt a message, one six-digit zero-padded block per three
    /// source characters.
    ///
    /// The first exponent applied to each block is `sender_private` when
    /// supplied, else the public exponent E. Keying the first layer with
    /// the sender's private exponent makes the transform signature-like:
    /// anyone holding E can undo it, and that it undoes cleanly ties the
    /// ciphertext to the sender. When `receiver_public` is also supplied,
    /// the intermediate result is exponentiated once more with it, giving
    /// authenticate-then-encrypt layering.
    ///
    /// A supplied sender private exponent is checked against E via
    /// [`RsaPublicKey::check_private_exponent`]; no such check is possible
    /// for the receiver exponent, whose pairing is unknown here.
    pub fn encrypt(
        &self,
        message: &str,
        sender_private: Option<&BigUint>,
        receiver_public: Option<&BigUint>,
    ) -> Result<Vec<String>> {
        let blocks = codec::encode(message)?;
        self.encrypt_blocks(&blocks, sender_private, receiver_public)
    }

    /// Encrypt already-encoded plaintext blocks
    pub fn encrypt_blocks<S>(
        &self,
        blocks: &[S],
        sender_private: Option<&BigUint>,
        receiver_public: Option<&BigUint>,
    ) -> Result<Vec<String>>
    where
        S: AsRef<str>,
    {
        if let Some(d) = sender_private {
            self.public_key.check_private_exponent(d)?;
        }

        let n = self.public_key.modulus();
        let first_exponent = sender_private.unwrap_or(&self.public_key.e);
        let mut ciphertext = Vec::with_capacity(blocks.len());

        for block in blocks {
            let m = codec::parse_block(block.as_ref())?;
            if m >= n {
                return Err(CipherError::Domain(format!(
                    "block value {m} is not below the modulus {n}"
                )));
            }

            let mut c = mod_exp(&m, first_exponent, &n)?;
            if let Some(r) = receiver_public {
                c = mod_exp(&c, r, &n)?;
            }
            ciphertext.push(codec::format_block(&c));
        }

        Ok(ciphertext)
    }

    /// Decrypt ciphertext blocks back into the numeric-block string.
    ///
    /// The receiver layer is undone first with `receiver_private`, then the
    /// sender layer with the public exponent E. Whether the keys actually
    /// invert each other is not verifiable here; with a wrong key this
    /// returns the mathematically defined (and useless) result rather than
    /// guessing.
    ///
    /// The result is the space-joined sequence of six-digit zero-padded
    /// blocks; apply [`codec::decode`] to map it back to text.
    pub fn decrypt<S>(&self, ciphertext: &[S], receiver_private: &BigUint) -> Result<String>
    where
        S: AsRef<str>,
    {
        let n = self.public_key.modulus();
        let mut blocks = Vec::with_capacity(ciphertext.len());

        for block in ciphertext {
            let c = codec::parse_block(block.as_ref())?;
            if c >= n {
                return Err(CipherError::Domain(format!(
                    "block value {c} is not below the modulus {n}"
                )));
            }

            let inner = mod_exp(&c, receiver_private, &n)?;
            let m = mod_exp(&inner, &self.public_key.e, &n)?;
            blocks.push(codec::format_block(&m));
        }

        Ok(blocks.join(&codec::SEPARATOR.to_string()))
    }
}
