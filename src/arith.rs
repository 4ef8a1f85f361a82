//! Modular arithmetic shared by both cipher engines

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::{CipherError, Result};

/// Modular exponentiation: base^exp mod modulus (square-and-multiply)
pub fn mod_exp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(CipherError::Domain("modulus must be positive".to_string()));
    }

    Ok(base.modpow(exp, modulus))
}

/// Modular multiplicative inverse: the x with a * x = 1 (mod modulus).
///
/// Computed with the extended Euclidean algorithm. Fails with
/// [`CipherError::NotInvertible`] when gcd(a, modulus) != 1, which covers
/// a = 0 and every operand sharing a factor with the modulus.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(CipherError::Domain("modulus must be positive".to_string()));
    }

    let m = BigInt::from(modulus.clone());
    let (gcd, x, _) = extended_gcd(&BigInt::from(a.clone()), &m);

    if !gcd.is_one() {
        return Err(CipherError::NotInvertible {
            value: a.clone(),
            modulus: modulus.clone(),
        });
    }

    // Normalize the Bezout coefficient into [0, m)
    let x = ((x % &m) + &m) % &m;
    Ok(x.to_biguint().expect("coefficient is non-negative after reduction"))
}

/// Extended Euclidean algorithm: returns (gcd, x, y) with a*x + b*y = gcd.
/// Runs over BigInt because the coefficients go negative along the way.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::ToBigUint;

    fn big(v: u64) -> BigUint {
        v.to_biguint().unwrap()
    }

    #[test]
    fn test_mod_exp() {
        assert_eq!(mod_exp(&big(2), &big(10), &big(1000)).unwrap(), big(24));
        assert_eq!(mod_exp(&big(9563), &big(3632), &big(262_643)).unwrap(), big(27_459));
    }

    #[test]
    fn test_mod_exp_zero_exponent() {
        assert_eq!(mod_exp(&big(7), &big(0), &big(13)).unwrap(), big(1));
    }

    #[test]
    fn test_mod_exp_zero_modulus() {
        assert!(matches!(
            mod_exp(&big(2), &big(3), &big(0)),
            Err(CipherError::Domain(_))
        ));
    }

    #[test]
    fn test_mod_inverse() {
        let a = big(3);
        let m = big(11);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!((a * inv) % m, big(1));
    }

    #[test]
    fn test_mod_inverse_large_coprime() {
        let a = big(154_993);
        let m = big(261_000);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!((a * inv) % m, big(1));
    }

    #[test]
    fn test_mod_inverse_not_invertible() {
        assert!(matches!(
            mod_inverse(&big(4), &big(8)),
            Err(CipherError::NotInvertible { .. })
        ));
        assert!(matches!(
            mod_inverse(&big(0), &big(7)),
            Err(CipherError::NotInvertible { .. })
        ));
    }
}
