use std::fmt;

use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, Parser};
use zeroize::Zeroize;

use crate::error::SignerError;

pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const SIGNATURE_DATA_VAR: &str = "SIGNATURE_DATA";

const ENVIRONMENT_HELP: &str = "Environment:
  PRIVATE_KEY     PEM-encoded unencrypted RSA private key
  SIGNATURE_DATA  Payload to sign";

/// Signs SIGNATURE_DATA with the RSA key in PRIVATE_KEY (PKCS#1 v1.5, SHA-256)
/// and prints the base64 signature.
// Inputs are environment-only: the hidden flags exist so clap can bind the
// variables, and `from_matches` refuses values passed through them.
#[derive(Parser)]
#[clap(name = "generate-signature", version, after_help = ENVIRONMENT_HELP)]
pub struct SigningInputs {
    #[clap(long, env = PRIVATE_KEY_VAR, hide = true, allow_hyphen_values = true)]
    private_key: Option<String>,
    #[clap(long, env = SIGNATURE_DATA_VAR, hide = true, allow_hyphen_values = true)]
    signature_data: Option<String>,
}

impl SigningInputs {
    pub fn new(private_key: Option<String>, signature_data: Option<String>) -> Self {
        Self { private_key, signature_data }
    }

    /// Reads both inputs from the process environment.
    ///
    /// `--help` and `--version` are handled by clap and exit the process.
    pub fn from_env() -> Result<Self, SignerError> {
        Self::from_matches(&Self::command().get_matches())
    }

    /// Builds inputs from parsed matches, refusing any value that did not
    /// come from its environment variable.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, SignerError> {
        Ok(Self {
            private_key: env_only(matches, "private_key", PRIVATE_KEY_VAR)?,
            signature_data: env_only(matches, "signature_data", SIGNATURE_DATA_VAR)?,
        })
    }

    /// Fails on the first input that is absent or empty.
    pub fn validate(&self) -> Result<(), SignerError> {
        self.private_key()?;
        self.payload()?;
        Ok(())
    }

    pub fn private_key(&self) -> Result<&str, SignerError> {
        required(&self.private_key, PRIVATE_KEY_VAR)
    }

    pub fn payload(&self) -> Result<&[u8], SignerError> {
        required(&self.signature_data, SIGNATURE_DATA_VAR).map(str::as_bytes)
    }
}

fn env_only(
    matches: &ArgMatches,
    id: &str,
    var: &'static str,
) -> Result<Option<String>, SignerError> {
    match matches.value_source(id) {
        None => Ok(None),
        Some(ValueSource::EnvVariable) => Ok(matches.get_one::<String>(id).cloned()),
        Some(_) => Err(SignerError::CommandLineInput(var)),
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, SignerError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SignerError::MissingInput(name)),
    }
}

impl Drop for SigningInputs {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl fmt::Debug for SigningInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningInputs")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("signature_data_len", &self.signature_data.as_ref().map(String::len))
            .finish()
    }
}
