use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("audit event field `{0}` is reserved")]
    ReservedField(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
