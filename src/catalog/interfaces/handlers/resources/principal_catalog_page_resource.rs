use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::domain::model::entities::enriched_principal::EnrichedPrincipal;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ListPrincipalsRequestResource {
    pub environments: Option<Vec<String>>,
    pub owner: Option<String>,
    #[validate(range(min = 1))]
    pub page: usize,
    #[validate(range(min = 1, max = 1000))]
    pub page_size: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PaginationResource {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrincipalCatalogPageResource {
    pub success: bool,
    pub principals: Vec<EnrichedPrincipal>,
    pub pagination: PaginationResource,
}
