use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevocationDomainError {
    #[error("invalid revocation request: {0}")]
    InvalidRequest(String),

    #[error("revocation id is invalid")]
    InvalidRevocationId,

    #[error("subject type is invalid")]
    InvalidSubjectType,

    #[error("subject id is invalid")]
    InvalidSubjectId,

    #[error("scope is invalid")]
    InvalidScope,

    #[error("revocation `{0}` not found")]
    RevocationNotFound(String),

    #[error("revocation `{0}` is already propagated")]
    AlreadyPropagated(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
