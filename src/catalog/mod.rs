use std::sync::Arc;

use crate::{
    catalog::{
        application::query_services::catalog_query_service_impl::CatalogQueryServiceImpl,
        infrastructure::identity_source::principal_source::PrincipalSource,
        interfaces::handlers::catalog_handler::CatalogHandler,
    },
    config::app_config::AppConfig,
    shared::infrastructure::{
        clock::Clock, persistence::repositories::audit_event_repository::AuditEventRepository,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_catalog_handler(
    config: &AppConfig,
    principal_source: Arc<dyn PrincipalSource>,
    audit_repository: Arc<dyn AuditEventRepository>,
    clock: Arc<dyn Clock>,
) -> CatalogHandler {
    let query_service = Arc::new(CatalogQueryServiceImpl::new(
        principal_source,
        audit_repository,
        clock,
    ));

    CatalogHandler::new(query_service, config.catalog_inactivity_days)
}
