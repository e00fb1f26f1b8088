use async_trait::async_trait;

use crate::{
    revocation::domain::model::{
        commands::create_revocation_request_command::CreateRevocationRequestCommand,
        entities::revocation_record::RevocationRecord,
        enums::revocation_domain_error::RevocationDomainError,
        value_objects::revocation_id::RevocationId,
    },
    shared::domain::model::value_objects::correlation_context::CorrelationContext,
};

#[async_trait]
pub trait RevocationCommandService: Send + Sync {
    /// The subject counts as revoked as soon as this returns.
    async fn handle_create_revocation_request(
        &self,
        command: CreateRevocationRequestCommand,
        context: &CorrelationContext,
    ) -> Result<RevocationRecord, RevocationDomainError>;

    async fn handle_mark_revocation_propagated(
        &self,
        revocation_id: &RevocationId,
        context: &CorrelationContext,
    ) -> Result<RevocationRecord, RevocationDomainError>;

    #[cfg(any(test, feature = "test-support"))]
    async fn reset(&self) -> Result<(), RevocationDomainError>;
}
