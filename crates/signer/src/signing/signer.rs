use crate::error::SignerError;

/// Trait for producing detached signatures over raw payload bytes.
///
/// Implementations are sync and stateless between calls, so a single
/// signer can be shared across threads.
pub trait PayloadSigner: Send + Sync {
    /// Sign the payload. Returns raw signature bytes.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError>;

    /// Length in bytes of every signature this signer produces.
    fn signature_len(&self) -> usize;

    /// Algorithm identifier string (e.g. "rsa-pkcs1v15-sha256").
    fn algorithm(&self) -> &str;
}
