//! # Schoolbook asymmetric ciphers
//!
//! A small teaching library that encodes text over a fixed 27-symbol
//! alphabet (A-Z plus space) into numeric blocks of three characters, and
//! runs two classical public-key schemes over those blocks:
//!
//! - **ElGamal**: probabilistic, one ciphertext pair (c1, c2) per block,
//!   driven by caller-supplied ephemeral secrets
//! - **RSA**: deterministic, one fixed-width decimal block per plaintext
//!   block, with optional sender-private and receiver-public key layering
//!
//! Every operation is a pure, synchronous function over caller-supplied
//! integers and strings: no key generation, no internal randomness, no
//! shared mutable state, so all components are safe to use from any number
//! of threads. None of it resists side channels or padding oracles; keep it
//! away from real secrets.
//!
//! ## Example
//!
//! ```rust
//! use num_bigint::{BigUint, ToBigUint};
//! use schoolbook::{codec, ElGamal, KeyPair};
//!
//! let keypair = KeyPair::from_secret(
//!     262_643u32.to_biguint().unwrap(),
//!     9_563u32.to_biguint().unwrap(),
//!     3_632u32.to_biguint().unwrap(),
//! )
//! .unwrap();
//!
//! let elgamal = ElGamal::new(keypair.public_key.clone());
//! let secrets: Vec<BigUint> = [5u32, 3_230, 9_921, 176, 28_119]
//!     .iter()
//!     .map(|k| k.to_biguint().unwrap())
//!     .collect();
//!
//! let ciphertext = elgamal.encrypt("PUPPIESARESMALL", &secrets).unwrap();
//! let plain = elgamal.decrypt(&ciphertext, &keypair.private_key).unwrap();
//!
//! assert_eq!(codec::decode(plain.split(' ')).unwrap(), "PUPPIESARESMALL");
//! ```

pub mod arith;
pub mod checksum;
pub mod codec;
pub mod elgamal;
pub mod error;
pub mod keys;
pub mod rsa;
pub mod types;

// Re-export main types for convenience
pub use codec::{decode, encode};
pub use elgamal::ElGamal;
pub use error::{CipherError, Result};
pub use keys::{KeyPair, PrivateKey, PublicKey, RsaPublicKey};
pub use rsa::Rsa;
pub use types::Ciphertext;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
