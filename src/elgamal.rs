//! ElGamal encryption and decryption over numeric message blocks

use num_bigint::BigUint;

use crate::arith::{mod_exp, mod_inverse};
use crate::codec;
use crate::error::{CipherError, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::types::Ciphertext;

/// ElGamal cipher engine bound to a public key.
///
/// Encryption is probabilistic per block, but the randomness is supplied by
/// the caller as one ephemeral exponent per block, so the transform itself
/// stays deterministic and testable.
#[derive(Clone, Debug)]
pub struct ElGamal {
    pub public_key: PublicKey,
}

impl ElGamal {
    /// Create a new engine for the given public key
    pub fn new(public_key: PublicKey) -> Self {
        ElGamal { public_key }
    }

    /// Encrypt a message, one ciphertext pair per three-character block.
    ///
    /// `ephemeral_secrets` must hold exactly one exponent per block, each
    /// ideally fresh and coprime to P-1; supplying and retiring them is the
    /// caller's responsibility.
    pub fn encrypt(&self, message: &str, ephemeral_secrets: &[BigUint]) -> Result<Vec<Ciphertext>> {
        let blocks = codec::encode(message)?;
        self.encrypt_blocks(&blocks, ephemeral_secrets)
    }

    /// Encrypt already-encoded plaintext blocks.
    ///
    /// For block value m and ephemeral secret k this produces
    /// C1 = G^k mod P and C2 = m * Y^k mod P.
    pub fn encrypt_blocks<S>(
        &self,
        blocks: &[S],
        ephemeral_secrets: &[BigUint],
    ) -> Result<Vec<Ciphertext>>
    where
        S: AsRef<str>,
    {
        if blocks.len() != ephemeral_secrets.len() {
            return Err(CipherError::LengthMismatch {
                blocks: blocks.len(),
                secrets: ephemeral_secrets.len(),
            });
        }

        let p = &self.public_key.p;
        let mut ciphertext = Vec::with_capacity(blocks.len());

        for (block, k) in blocks.iter().zip(ephemeral_secrets) {
            let m = codec::parse_block(block.as_ref())?;
            if &m >= p {
                return Err(CipherError::Domain(format!(
                    "block value {m} is not below the modulus {p}"
                )));
            }

            let c1 = mod_exp(&self.public_key.g, k, p)?;
            let c2 = (&m * mod_exp(&self.public_key.y, k, p)?) % p;
            ciphertext.push(Ciphertext::new(c1, c2));
        }

        Ok(ciphertext)
    }

    /// Decrypt ciphertext pairs back into the numeric-block string.
    ///
    /// Each block is recovered as m = (C1^x)^-1 * C2 mod P; the negative
    /// power C1^-x is expressed as a modular inverse composed with a
    /// modular exponentiation. Fails with [`CipherError::NotInvertible`]
    /// when C1^x has no inverse mod P, which cannot happen for ciphertext
    /// honestly produced under a prime modulus.
    ///
    /// The result is the space-joined sequence of six-digit zero-padded
    /// blocks; apply [`codec::decode`] to map it back to text.
    pub fn decrypt(&self, ciphertext: &[Ciphertext], private_key: &PrivateKey) -> Result<String> {
        let p = &self.public_key.p;
        let mut blocks = Vec::with_capacity(ciphertext.len());

        for block in ciphertext {
            let shared = mod_exp(&block.c1, &private_key.x, p)?;
            let shared_inv = mod_inverse(&shared, p)?;
            let m = (shared_inv * &block.c2) % p;
            blocks.push(codec::format_block(&m));
        }

        Ok(blocks.join(&codec::SEPARATOR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::ToBigUint;

    use crate::keys::KeyPair;

    fn big(v: u64) -> BigUint {
        v.to_biguint().unwrap()
    }

    fn demo_keypair() -> KeyPair {
        KeyPair::from_secret(big(262_643), big(9_563), big(3_632)).unwrap()
    }

    fn demo_secrets() -> Vec<BigUint> {
        [5u64, 3_230, 9_921, 176, 28_119].iter().map(|&k| big(k)).collect()
    }

    #[test]
    fn test_known_ciphertext() {
        let elgamal = ElGamal::new(demo_keypair().public_key);
        let ciphertext = elgamal.encrypt("PUPPIESARESMALL", &demo_secrets()).unwrap();

        let expected = [
            (15_653u64, 923u64),
            (46_495, 109_351),
            (176_489, 208_811),
            (88_247, 144_749),
            (152_432, 5_198),
        ];
        assert_eq!(ciphertext.len(), expected.len());
        for (block, (c1, c2)) in ciphertext.iter().zip(expected) {
            assert_eq!(block.c1(), &big(c1));
            assert_eq!(block.c2(), &big(c2));
        }
    }

    #[test]
    fn test_decrypt_recovers_numeric_blocks() {
        let keypair = demo_keypair();
        let elgamal = ElGamal::new(keypair.public_key.clone());

        let ciphertext = elgamal.encrypt("PUPPIESARESMALL", &demo_secrets()).unwrap();
        let plain = elgamal.decrypt(&ciphertext, &keypair.private_key).unwrap();

        assert_eq!(plain, "152015 150804 180017 041812 001111");
    }

    #[test]
    fn test_secret_count_must_match_block_count() {
        let elgamal = ElGamal::new(demo_keypair().public_key);
        let result = elgamal.encrypt("PUPPIESARESMALL", &[big(5), big(3_230)]);

        assert!(matches!(
            result,
            Err(CipherError::LengthMismatch { blocks: 5, secrets: 2 })
        ));
    }

    #[test]
    fn test_block_value_must_be_below_modulus() {
        // "ZZ" encodes as 2525, far above this toy modulus
        let elgamal = ElGamal::new(PublicKey::new(big(101), big(2), big(3)));
        assert!(matches!(
            elgamal.encrypt("ZZ", &[big(5)]),
            Err(CipherError::Domain(_))
        ));
    }

    #[test]
    fn test_degenerate_c1_is_not_invertible() {
        let keypair = demo_keypair();
        let elgamal = ElGamal::new(keypair.public_key.clone());

        let forged = [Ciphertext::new(big(0), big(5))];
        assert!(matches!(
            elgamal.decrypt(&forged, &keypair.private_key),
            Err(CipherError::NotInvertible { .. })
        ));
    }

    #[test]
    fn test_empty_message() {
        let keypair = demo_keypair();
        let elgamal = ElGamal::new(keypair.public_key.clone());

        let ciphertext = elgamal.encrypt("", &[]).unwrap();
        assert!(ciphertext.is_empty());
        assert_eq!(elgamal.decrypt(&ciphertext, &keypair.private_key).unwrap(), "");
    }
}
