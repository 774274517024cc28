use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes raw signature bytes as standard, padded base64 (RFC 4648).
pub fn encode_signature(signature: &[u8]) -> String {
    STANDARD.encode(signature)
}
