use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{ObjectIdentifier, PrivateKeyInfo};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::SignerError;

/// rsaEncryption, the only PKCS#8 algorithm accepted.
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

const PKCS8_LABEL: &str = "PRIVATE KEY";
const PKCS1_LABEL: &str = "RSA PRIVATE KEY";
const ENCRYPTED_PKCS8_LABEL: &str = "ENCRYPTED PRIVATE KEY";
const LEGACY_ENCRYPTED_HEADER: &str = "Proc-Type: 4,ENCRYPTED";

const BEGIN_PREFIX: &str = "-----BEGIN ";
const BOUNDARY_SUFFIX: &str = "-----";

/// Parses an unencrypted RSA private key from PEM text.
///
/// Accepts PKCS#8 (`PRIVATE KEY`) and PKCS#1 (`RSA PRIVATE KEY`) blocks.
/// Encrypted blocks and keys of any other type are rejected.
pub fn load_private_key(pem_text: &str) -> Result<RsaPrivateKey, SignerError> {
    if pem_text.contains(LEGACY_ENCRYPTED_HEADER) {
        return Err(SignerError::EncryptedKey);
    }

    let (label, der) = decode_pem(pem_text)?;

    debug!(label, der_len = der.len(), "decoded private key PEM block");

    match label {
        PKCS8_LABEL => parse_pkcs8(&der),
        PKCS1_LABEL => RsaPrivateKey::from_pkcs1_der(&der)
            .map_err(|e| SignerError::MalformedKey(format!("invalid PKCS#1 key: {e}"))),
        ENCRYPTED_PKCS8_LABEL => Err(SignerError::EncryptedKey),
        other => Err(SignerError::UnsupportedKeyType(other.to_string())),
    }
}

/// Extracts the first PEM block.
///
/// The body may be wrapped at any width (or not at all) with LF or CRLF
/// line endings; all whitespace inside it is ignored before base64 decoding.
fn decode_pem(text: &str) -> Result<(&str, Zeroizing<Vec<u8>>), SignerError> {
    let begin = text
        .find(BEGIN_PREFIX)
        .ok_or_else(|| malformed("missing BEGIN boundary"))?;
    let after_begin = &text[begin + BEGIN_PREFIX.len()..];

    let label_len = after_begin
        .find(BOUNDARY_SUFFIX)
        .ok_or_else(|| malformed("unterminated BEGIN boundary"))?;
    let label = &after_begin[..label_len];
    if label.contains(['\r', '\n']) {
        return Err(malformed("unterminated BEGIN boundary"));
    }

    let rest = &after_begin[label_len + BOUNDARY_SUFFIX.len()..];
    let end_boundary = format!("-----END {label}-----");
    let body_len = rest
        .find(&end_boundary)
        .ok_or_else(|| SignerError::MalformedKey(format!("missing END boundary for {label}")))?;

    let body: Zeroizing<String> = Zeroizing::new(
        rest[..body_len]
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect(),
    );
    let der = STANDARD
        .decode(body.as_bytes())
        .map_err(|e| SignerError::MalformedKey(format!("invalid PEM body: {e}")))?;

    Ok((label, Zeroizing::new(der)))
}

fn malformed(reason: &str) -> SignerError {
    SignerError::MalformedKey(format!("invalid PEM: {reason}"))
}

fn parse_pkcs8(der: &[u8]) -> Result<RsaPrivateKey, SignerError> {
    let info = PrivateKeyInfo::try_from(der)
        .map_err(|e| SignerError::MalformedKey(format!("invalid PKCS#8 key: {e}")))?;

    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Err(SignerError::UnsupportedKeyType(format!(
            "PKCS#8 algorithm {}",
            info.algorithm.oid
        )));
    }

    RsaPrivateKey::try_from(info)
        .map_err(|e| SignerError::MalformedKey(format!("invalid PKCS#8 key: {e}")))
}
