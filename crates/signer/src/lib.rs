pub mod config;
pub mod encoding;
pub mod error;
pub mod key;
pub mod signing;

#[cfg(test)]
mod testing;

pub use config::SigningInputs;
pub use encoding::encode_signature;
pub use error::SignerError;
pub use key::load_private_key;
pub use signing::{PayloadSigner, RsaSigner};

/// Signs `payload` with the RSA key in `private_key_pem` and returns the
/// base64 encoded PKCS#1 v1.5 / SHA-256 signature.
///
/// The key is parsed on every call; nothing is shared between calls.
pub fn generate_signature(private_key_pem: &str, payload: &[u8]) -> Result<String, SignerError> {
    let signer = RsaSigner::from_pem(private_key_pem)?;
    let signature = signer.sign(payload)?;
    Ok(encode_signature(&signature))
}
