use std::io::{self, Write};

use anyhow::{Context, Result};
use simple_signer::{PayloadSigner, RsaSigner, SignerError, SigningInputs, encode_signature};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(false)
        .compact()
        .init();

    let inputs = SigningInputs::from_env()?;
    inputs.validate()?;

    let signature = sign(&inputs).map_err(|e| {
        let context = if e.is_key_error() {
            "loading PRIVATE_KEY"
        } else {
            "signing SIGNATURE_DATA"
        };
        anyhow::Error::new(e).context(context)
    })?;
    drop(inputs);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", encode_signature(&signature)).context("writing signature")?;
    Ok(())
}

fn sign(inputs: &SigningInputs) -> Result<Vec<u8>, SignerError> {
    let signer = RsaSigner::from_pem(inputs.private_key()?)?;
    let signature = signer.sign(inputs.payload()?)?;
    info!(algorithm = signer.algorithm(), "signature generated");
    Ok(signature)
}
