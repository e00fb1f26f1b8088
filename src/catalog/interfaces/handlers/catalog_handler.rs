use std::sync::Arc;

use validator::Validate;

use crate::{
    catalog::{
        domain::{
            model::{
                entities::{
                    catalog_snapshot::CatalogSnapshot, enriched_principal::EnrichedPrincipal,
                },
                enums::catalog_domain_error::CatalogDomainError,
                queries::list_principals_query::{ListPrincipalsQuery, ListPrincipalsQueryParts},
            },
            services::catalog_query_service::CatalogQueryService,
        },
        interfaces::handlers::resources::principal_catalog_page_resource::{
            ListPrincipalsRequestResource, PaginationResource, PrincipalCatalogPageResource,
        },
    },
    shared::domain::model::value_objects::correlation_context::CorrelationContext,
};

#[derive(Clone)]
pub struct CatalogHandler {
    query_service: Arc<dyn CatalogQueryService>,
    inactivity_days: u32,
}

impl CatalogHandler {
    pub fn new(query_service: Arc<dyn CatalogQueryService>, inactivity_days: u32) -> Self {
        Self {
            query_service,
            inactivity_days,
        }
    }

    /// One page of the analyzed inventory. Filters apply before paging; a
    /// page past the end is empty rather than an error.
    pub async fn get_principals(
        &self,
        request: ListPrincipalsRequestResource,
    ) -> Result<PrincipalCatalogPageResource, CatalogDomainError> {
        if let Err(validation_error) = request.validate() {
            return Err(CatalogDomainError::InvalidRequest(
                validation_error.to_string(),
            ));
        }

        let query = ListPrincipalsQuery::new(ListPrincipalsQueryParts {
            environments: request.environments,
            owner: request.owner,
            page: request.page,
            page_size: request.page_size,
        })?;

        let principals = self
            .query_service
            .handle_list_enriched_principals(self.inactivity_days)
            .await?;

        let filtered = principals
            .into_iter()
            .filter(|principal| Self::matches_filters(principal, &query))
            .collect::<Vec<_>>();

        let total_count = filtered.len();
        let start = (query.page() - 1).saturating_mul(query.page_size());
        let page_items = filtered
            .into_iter()
            .skip(start)
            .take(query.page_size())
            .collect();

        Ok(PrincipalCatalogPageResource {
            success: true,
            principals: page_items,
            pagination: PaginationResource {
                page: query.page(),
                page_size: query.page_size(),
                total_count,
                total_pages: total_count.div_ceil(query.page_size()),
            },
        })
    }

    pub async fn export_catalog_snapshot(
        &self,
        context: &CorrelationContext,
    ) -> Result<CatalogSnapshot, CatalogDomainError> {
        self.query_service
            .handle_export_snapshot(context, self.inactivity_days)
            .await
    }

    fn matches_filters(principal: &EnrichedPrincipal, query: &ListPrincipalsQuery) -> bool {
        let environment_match = match query.environments() {
            None => true,
            Some(environments) => principal
                .principal
                .environment()
                .is_some_and(|environment| environments.iter().any(|e| e == environment)),
        };

        let owner_match = match query.owner() {
            None => true,
            Some(owner) => principal.owner == owner,
        };

        environment_match && owner_match
    }
}
