#![allow(dead_code)]

use std::sync::OnceLock;

use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::RsaPrivateKey;
use sha2::{Digest, Sha256};

/// Known 2048-bit test key, derived from a fixed seed.
pub fn test_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        let hash = Sha256::digest(b"release-signing-test-key");
        let mut rng = ChaCha20Rng::from_seed(hash.into());
        RsaPrivateKey::new(&mut rng, 2048).unwrap()
    })
}

pub fn pkcs8_pem() -> String {
    test_key().to_pkcs8_pem(LineEnding::LF).unwrap().to_string()
}

pub fn pkcs1_pem() -> String {
    test_key().to_pkcs1_pem(LineEnding::LF).unwrap().to_string()
}

/// A valid PKCS#8 key that is not RSA.
pub fn secp256k1_pem() -> String {
    use k256::pkcs8::EncodePrivateKey as _;

    let secret = k256::SecretKey::from_slice(&Sha256::digest(b"not-an-rsa-key")).unwrap();
    secret.to_pkcs8_pem(k256::pkcs8::LineEnding::LF).unwrap().to_string()
}
