use thiserror::Error;

use crate::catalog::infrastructure::identity_source::principal_source::PrincipalSourceError;

#[derive(Debug, Error)]
pub enum CatalogDomainError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("page must be 1 or greater")]
    InvalidPage,

    #[error("page size must be between 1 and {max}")]
    InvalidPageSize { max: usize },

    #[error(transparent)]
    PrincipalSource(#[from] PrincipalSourceError),
}
