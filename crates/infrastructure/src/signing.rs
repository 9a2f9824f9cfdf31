use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use namegate_application::ports::AnswerSigner;
use namegate_domain::{Address, Bytes, DomainError, B256};
use tracing::error;

/// Parses a hex private key, with or without `0x`.
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, DomainError> {
    key.trim().parse::<PrivateKeySigner>().map_err(|e| {
        error!(error = %e, "Invalid private key");
        DomainError::ConfigError(format!("invalid private key: {}", e))
    })
}

/// Gateway answer signer backed by an in-process secp256k1 key.
pub struct LocalAnswerSigner {
    signer: PrivateKeySigner,
}

impl LocalAnswerSigner {
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    pub fn from_hex(key: &str) -> Result<Self, DomainError> {
        parse_private_key(key).map(Self::new)
    }
}

impl AnswerSigner for LocalAnswerSigner {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn sign_digest(&self, digest: B256) -> Result<Bytes, DomainError> {
        let signature = self.signer.sign_hash_sync(&digest).map_err(|e| {
            error!(error = %e, "Failed to sign gateway answer");
            DomainError::SigningFailed(e.to_string())
        })?;
        Ok(Bytes::from(signature.as_bytes().to_vec()))
    }
}
