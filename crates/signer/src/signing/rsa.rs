use std::fmt;

use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::signer::PayloadSigner;
use crate::error::SignerError;
use crate::key::load_private_key;

/// RSA PKCS#1 v1.5 signer with SHA-256 digest.
///
/// The padding is deterministic: the same key and payload always
/// produce the same signature bytes. The private-key operation is
/// blinded with a fresh random value on every call; blinding does not
/// change the output.
pub struct RsaSigner {
    private_key: RsaPrivateKey,
}

impl RsaSigner {
    /// Parses `pem` as an unencrypted RSA private key.
    pub fn from_pem(pem: &str) -> Result<Self, SignerError> {
        Ok(Self::from_key(load_private_key(pem)?))
    }

    pub fn from_key(private_key: RsaPrivateKey) -> Self {
        Self { private_key }
    }
}

impl PayloadSigner for RsaSigner {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError> {
        let digest = Sha256::digest(payload);
        let signature = self.private_key.sign_with_rng(
            &mut rand::thread_rng(),
            Pkcs1v15Sign::new::<Sha256>(),
            &digest,
        )?;

        debug!(
            algorithm = self.algorithm(),
            payload_len = payload.len(),
            signature_len = signature.len(),
            "signed payload"
        );
        Ok(signature)
    }

    fn signature_len(&self) -> usize {
        self.private_key.size()
    }

    fn algorithm(&self) -> &str {
        "rsa-pkcs1v15-sha256"
    }
}

// Never print key components.
impl fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigner")
            .field("algorithm", &self.algorithm())
            .field("modulus_bits", &(self.private_key.size() * 8))
            .finish_non_exhaustive()
    }
}
