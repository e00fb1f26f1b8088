use async_trait::async_trait;

use crate::revocation::domain::model::{
    entities::revocation_record::RevocationRecord,
    enums::revocation_domain_error::RevocationDomainError,
    value_objects::{revocation_id::RevocationId, revocation_subject::RevocationSubject},
};

#[async_trait]
pub trait RevocationRepository: Send + Sync {
    async fn save(&self, record: &RevocationRecord) -> Result<(), RevocationDomainError>;

    async fn update(&self, record: &RevocationRecord) -> Result<(), RevocationDomainError>;

    async fn find_by_id(
        &self,
        revocation_id: &RevocationId,
    ) -> Result<Option<RevocationRecord>, RevocationDomainError>;

    /// Records for the exact subject pair, oldest first.
    async fn find_by_subject(
        &self,
        subject: &RevocationSubject,
    ) -> Result<Vec<RevocationRecord>, RevocationDomainError>;

    async fn list(&self) -> Result<Vec<RevocationRecord>, RevocationDomainError>;

    #[cfg(any(test, feature = "test-support"))]
    async fn clear(&self) -> Result<(), RevocationDomainError>;
}
