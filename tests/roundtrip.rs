//! End-to-end round trips through the codec and both cipher engines

use num_bigint::{BigUint, ToBigUint};
use schoolbook::{codec, CipherError, ElGamal, KeyPair, Rsa, RsaPublicKey};

fn big(v: u64) -> BigUint {
    v.to_biguint().unwrap()
}

fn elgamal_keypair() -> KeyPair {
    KeyPair::from_secret(big(262_643), big(9_563), big(3_632)).unwrap()
}

fn rsa_engine() -> Rsa {
    Rsa::new(RsaPublicKey::new(big(181), big(1_451), big(154_993)))
}

#[test]
fn codec_round_trips_alphabet_messages() {
    for message in ["PUPPIESARESMALL", "HELLO WORLD", "ZEBRA", "A"] {
        let blocks = codec::encode(message).unwrap();
        assert_eq!(codec::decode(&blocks).unwrap(), message);
    }
}

#[test]
fn codec_uppercases_before_encoding() {
    let blocks = codec::encode("PuppiesAreSmall").unwrap();
    assert_eq!(codec::decode(&blocks).unwrap(), "PUPPIESARESMALL");
}

#[test]
fn elgamal_end_to_end() {
    let keypair = elgamal_keypair();
    assert_eq!(keypair.public_key.public_component(), &big(27_459));

    let elgamal = ElGamal::new(keypair.public_key.clone());
    let secrets: Vec<BigUint> = [5u64, 3_230, 9_921, 176, 28_119]
        .iter()
        .map(|&k| big(k))
        .collect();

    let ciphertext = elgamal.encrypt("PUPPIESareSmAll", &secrets).unwrap();
    let expected = [
        (15_653u64, 923u64),
        (46_495, 109_351),
        (176_489, 208_811),
        (88_247, 144_749),
        (152_432, 5_198),
    ];
    for (block, (c1, c2)) in ciphertext.iter().zip(expected) {
        assert_eq!((block.c1(), block.c2()), (&big(c1), &big(c2)));
    }

    let plain = elgamal.decrypt(&ciphertext, &keypair.private_key).unwrap();
    assert_eq!(plain, "152015 150804 180017 041812 001111");
    assert_eq!(
        codec::decode(plain.split(codec::SEPARATOR)).unwrap(),
        "PUPPIESARESMALL"
    );
}

#[test]
fn elgamal_rejects_mismatched_secret_count() {
    let elgamal = ElGamal::new(elgamal_keypair().public_key);
    assert!(matches!(
        elgamal.encrypt("PUPPIESARESMALL", &[big(5)]),
        Err(CipherError::LengthMismatch { .. })
    ));
}

#[test]
fn rsa_known_ciphertexts_for_each_layering() {
    let rsa = rsa_engine();

    assert_eq!(
        rsa.encrypt("PUPPIESARESMALL", None, None).unwrap(),
        vec!["220160", "135824", "252355", "245799", "070707"]
    );
    assert_eq!(
        rsa.encrypt("PUPPIESARESMALL", Some(&big(95_857)), None).unwrap(),
        vec!["072798", "259757", "256449", "089234", "037974"]
    );
    assert_eq!(
        rsa.encrypt("PUPPIESARESMALL", Some(&big(95_857)), Some(&big(45_593)))
            .unwrap(),
        vec!["249123", "166008", "146608", "092311", "096768"]
    );
}

#[test]
fn rsa_layered_end_to_end() {
    let rsa = rsa_engine();

    let ciphertext = rsa
        .encrypt("PUPPIESARESMALL", Some(&big(95_857)), Some(&big(45_593)))
        .unwrap();
    let plain = rsa.decrypt(&ciphertext, &big(235_457)).unwrap();

    assert_eq!(plain, "152015 150804 180017 041812 001111");
    assert_eq!(
        codec::decode(plain.split(codec::SEPARATOR)).unwrap(),
        "PUPPIESARESMALL"
    );
}

#[test]
fn rsa_rejects_inconsistent_sender_exponent() {
    let rsa = rsa_engine();
    assert!(matches!(
        rsa.encrypt("PUPPIESARESMALL", Some(&big(12_345)), None),
        Err(CipherError::KeyMismatch(_))
    ));
}
