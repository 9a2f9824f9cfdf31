use namegate_domain::{Address, Bytes, DomainError, B256};

pub trait AnswerSigner: Send + Sync {
    fn address(&self) -> Address;

    /// 65-byte `r ‖ s ‖ v` signature over a prehashed digest.
    fn sign_digest(&self, digest: B256) -> Result<Bytes, DomainError>;
}
