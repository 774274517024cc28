#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("{0} environment variable is required")]
    MissingInput(&'static str),
    #[error("{0} must be supplied through the environment, not the command line")]
    CommandLineInput(&'static str),
    #[error("Failed to parse RSA private key: {0}")]
    MalformedKey(String),
    #[error("Unsupported private key type: {0}")]
    UnsupportedKeyType(String),
    #[error("Encrypted private keys are not supported")]
    EncryptedKey,
    #[error("Failed to sign payload: {0}")]
    Signing(#[from] rsa::Error),
}

impl SignerError {
    /// True for every failure caused by the key material itself.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            SignerError::MalformedKey(_) | SignerError::UnsupportedKeyType(_) | SignerError::EncryptedKey
        )
    }
}
