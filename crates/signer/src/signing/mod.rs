mod signer;
mod rsa;

pub use signer::PayloadSigner;
pub use self::rsa::RsaSigner;
