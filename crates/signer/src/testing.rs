//! Deterministic key fixtures for unit tests.

use std::sync::OnceLock;

use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use rsa::RsaPrivateKey;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use sha2::{Digest, Sha256};

pub(crate) const TEST_KEY_BITS: usize = 2048;

/// 2048-bit key derived from a fixed seed, generated once per test binary.
pub(crate) fn rsa_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| key_from_seed("simple-signer-test-key", TEST_KEY_BITS))
}

pub(crate) fn key_from_seed(seed: &str, bits: usize) -> RsaPrivateKey {
    let hash = Sha256::digest(seed.as_bytes());
    let mut rng = ChaCha20Rng::from_seed(hash.into());
    RsaPrivateKey::new(&mut rng, bits).unwrap()
}

pub(crate) fn pkcs8_pem() -> String {
    rsa_key().to_pkcs8_pem(LineEnding::LF).unwrap().to_string()
}

pub(crate) fn pkcs1_pem() -> String {
    rsa_key().to_pkcs1_pem(LineEnding::LF).unwrap().to_string()
}
