use async_trait::async_trait;

use crate::{
    catalog::domain::model::{
        entities::{
            catalog_snapshot::CatalogSnapshot, enriched_principal::EnrichedPrincipal,
            principal::Principal,
        },
        enums::catalog_domain_error::CatalogDomainError,
    },
    shared::domain::model::value_objects::correlation_context::CorrelationContext,
};

#[async_trait]
pub trait CatalogQueryService: Send + Sync {
    /// Walks every page of the identity source. Source failures are returned
    /// as-is and never retried here.
    async fn handle_fetch_principals(&self) -> Result<Vec<Principal>, CatalogDomainError>;

    async fn handle_list_enriched_principals(
        &self,
        inactivity_days: u32,
    ) -> Result<Vec<EnrichedPrincipal>, CatalogDomainError>;

    async fn handle_export_snapshot(
        &self,
        context: &CorrelationContext,
        inactivity_days: u32,
    ) -> Result<CatalogSnapshot, CatalogDomainError>;
}
