//! Demo driver: round-trips a message through both ciphers and prints
//! every intermediate representation.

use num_bigint::{BigUint, ToBigUint};
use schoolbook::{checksum, codec, ElGamal, KeyPair, Rsa, RsaPublicKey};

fn big(v: u64) -> BigUint {
    v.to_biguint().expect("u64 always converts")
}

fn main() {
    println!("=== Schoolbook ElGamal / RSA Demo ===\n");

    let message = "PUPPIESareSmAll";

    // ========== ELGAMAL ==========
    println!("--- ElGamal ---");
    let keypair = KeyPair::from_secret(big(262_643), big(9_563), big(3_632))
        .expect("demo parameters are valid");
    println!("Public key: (P, G, Y) = (262643, 9563, {})", keypair.public_key.public_component());

    let secrets: Vec<BigUint> = [5u64, 3_230, 9_921, 176, 28_119]
        .iter()
        .map(|&k| big(k))
        .collect();

    let elgamal = ElGamal::new(keypair.public_key.clone());
    let ciphertext = elgamal.encrypt(message, &secrets).expect("encryption failed");
    let plain = elgamal
        .decrypt(&ciphertext, &keypair.private_key)
        .expect("decryption failed");
    let recovered = codec::decode(plain.split(codec::SEPARATOR)).expect("decoding failed");

    println!("Original message:   {message}");
    println!(
        "Plaintext blocks:   {}",
        codec::encode(message).expect("encoding failed").join(" ")
    );
    print!("Encrypted message:  ");
    for block in &ciphertext {
        print!("{block} ");
    }
    println!();
    println!("Decrypted message:  {recovered}\n");

    // ========== RSA ==========
    println!("--- RSA ---");
    let rsa = Rsa::new(RsaPublicKey::new(big(181), big(1_451), big(154_993)));
    let sender_private = big(95_857);
    let receiver_public = big(45_593);
    let receiver_private = big(235_457);

    let public_only = rsa
        .encrypt(message, None, None)
        .expect("encryption failed");
    println!("Public exponent only:        {}", public_only.join(" "));

    let signed = rsa
        .encrypt(message, Some(&sender_private), None)
        .expect("encryption failed");
    println!("Sender-private layer:        {}", signed.join(" "));

    let layered = rsa
        .encrypt(message, Some(&sender_private), Some(&receiver_public))
        .expect("encryption failed");
    println!("Authenticate-then-encrypt:   {}", layered.join(" "));

    let plain = rsa
        .decrypt(&layered, &receiver_private)
        .expect("decryption failed");
    let recovered = codec::decode(plain.split(codec::SEPARATOR)).expect("decoding failed");
    println!("Decrypted message:           {recovered}\n");

    // ========== CHECKSUM TREE ==========
    println!("--- Checksum tree ---");
    let root = checksum::tree_root(&[3, 6, 21, 72], 16).expect("modulus is positive");
    println!("root([3, 6, 21, 72], 16) = {root}");
}
