//! Key material for the two cipher engines
//!
//! Nothing here generates keys: primes, generators and secret exponents are
//! always supplied by the caller. The only derivation offered is computing
//! the ElGamal public component from a given secret exponent.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arith::mod_exp;
use crate::error::{CipherError, Result};

/// ElGamal public key triple (P, G, Y) with Y = G^x mod P
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey {
    pub(crate) p: BigUint, // Prime modulus
    pub(crate) g: BigUint, // Generator
    pub(crate) y: BigUint, // G^x mod P (public component)
}

impl PublicKey {
    /// Create a new public key from its three components
    pub fn new(p: BigUint, g: BigUint, y: BigUint) -> Self {
        PublicKey { p, g, y }
    }

    /// Get the prime modulus
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Get the generator
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// Get the public component (G^x mod P)
    pub fn public_component(&self) -> &BigUint {
        &self.y
    }

    /// Validate the structural invariants of the key.
    ///
    /// Primality of P and primitivity of G are the caller's responsibility;
    /// only the range constraints are checked here.
    pub fn validate(&self) -> Result<()> {
        if self.p <= BigUint::from(2u32) {
            return Err(CipherError::Domain("modulus p must be > 2".to_string()));
        }

        if self.g <= BigUint::one() || self.g >= self.p {
            return Err(CipherError::Domain(
                "generator g must be in range (1, p)".to_string(),
            ));
        }

        if self.y.is_zero() || self.y >= self.p {
            return Err(CipherError::Domain(
                "public component y must be in range (0, p)".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({} bits)", self.p.bits())
    }
}

/// ElGamal private key: the secret exponent x
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrivateKey {
    pub(crate) x: BigUint,
}

impl PrivateKey {
    /// Create a new private key
    pub fn new(x: BigUint) -> Self {
        PrivateKey { x }
    }

    /// Get the secret exponent
    pub fn secret_exponent(&self) -> &BigUint {
        &self.x
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(***)")
    }
}

/// ElGamal key pair
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
}

impl KeyPair {
    /// Build a key pair from the domain parameters and a secret exponent,
    /// deriving the public component Y = G^x mod P.
    pub fn from_secret(p: BigUint, g: BigUint, x: BigUint) -> Result<Self> {
        let y = mod_exp(&g, &x, &p)?;
        let public_key = PublicKey { p, g, y };
        public_key.validate()?;

        Ok(KeyPair {
            public_key,
            private_key: PrivateKey { x },
        })
    }
}

/// RSA public key triple (P, Q, E); the public modulus is N = P * Q.
///
/// The matching private exponent is whatever the key owner holds; this
/// library never derives it and treats it as an opaque integer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsaPublicKey {
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) e: BigUint,
}

impl RsaPublicKey {
    /// Create a new public key from its three components
    pub fn new(p: BigUint, q: BigUint, e: BigUint) -> Self {
        RsaPublicKey { p, q, e }
    }

    /// Get the public modulus N = P * Q
    pub fn modulus(&self) -> BigUint {
        &self.p * &self.q
    }

    /// Get the public exponent
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Validate the structural invariants of the key
    pub fn validate(&self) -> Result<()> {
        let two = BigUint::from(2u32);
        if self.p < two || self.q < two {
            return Err(CipherError::Domain(
                "prime factors p and q must both be >= 2".to_string(),
            ));
        }

        if self.e.is_zero() {
            return Err(CipherError::Domain(
                "public exponent e must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Best-effort consistency check of a claimed private exponent.
    ///
    /// With both prime factors at hand, E * d = 1 (mod lcm(P-1, Q-1)) is
    /// checkable directly. The Carmichael totient is used rather than the
    /// Euler totient so exponents derived from either convention pass.
    pub fn check_private_exponent(&self, d: &BigUint) -> Result<()> {
        self.validate()?;

        let lambda = (&self.p - 1u32).lcm(&(&self.q - 1u32));
        if (&self.e * d) % &lambda != BigUint::one() {
            return Err(CipherError::KeyMismatch(
                "private exponent is not the inverse of the public exponent".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RsaPublicKey({} bits)", self.modulus().bits())
    }
}
