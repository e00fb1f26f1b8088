use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    catalog::{
        domain::{
            model::{
                entities::{
                    catalog_snapshot::{CatalogSnapshot, CatalogSummary},
                    enriched_principal::EnrichedPrincipal,
                    principal::Principal,
                },
                enums::catalog_domain_error::CatalogDomainError,
            },
            services::{
                catalog_query_service::CatalogQueryService, principal_risk_analyzer::enrich_principal,
            },
        },
        infrastructure::identity_source::principal_source::PrincipalSource,
    },
    shared::{
        domain::{
            model::value_objects::correlation_context::CorrelationContext,
            services::evidence_constructor::{CatalogSnapshotEvidence, EvidenceConstructor},
        },
        infrastructure::{
            clock::Clock,
            persistence::repositories::audit_event_repository::AuditEventRepository,
        },
    },
};

pub struct CatalogQueryServiceImpl {
    principal_source: Arc<dyn PrincipalSource>,
    audit_repository: Arc<dyn AuditEventRepository>,
    evidence: EvidenceConstructor,
    clock: Arc<dyn Clock>,
}

impl CatalogQueryServiceImpl {
    pub fn new(
        principal_source: Arc<dyn PrincipalSource>,
        audit_repository: Arc<dyn AuditEventRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            principal_source,
            audit_repository,
            evidence: EvidenceConstructor::new(clock.clone()),
            clock,
        }
    }

    async fn enrich_at(
        &self,
        inactivity_days: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<EnrichedPrincipal>, CatalogDomainError> {
        let principals = self.handle_fetch_principals().await?;

        Ok(principals
            .iter()
            .map(|principal| enrich_principal(principal, inactivity_days, now))
            .collect())
    }
}

#[async_trait]
impl CatalogQueryService for CatalogQueryServiceImpl {
    async fn handle_fetch_principals(&self) -> Result<Vec<Principal>, CatalogDomainError> {
        let mut principals = Vec::new();
        let mut marker = None;
        let mut pages = 0usize;

        loop {
            let page = self.principal_source.list_principals(marker).await?;
            pages += 1;
            principals.extend(page.principals);

            match page.next_marker {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        debug!(pages, principals = principals.len(), "fetched principal inventory");
        Ok(principals)
    }

    async fn handle_list_enriched_principals(
        &self,
        inactivity_days: u32,
    ) -> Result<Vec<EnrichedPrincipal>, CatalogDomainError> {
        self.enrich_at(inactivity_days, self.clock.now()).await
    }

    async fn handle_export_snapshot(
        &self,
        context: &CorrelationContext,
        inactivity_days: u32,
    ) -> Result<CatalogSnapshot, CatalogDomainError> {
        // One reading covers both the inactivity cutoff and the snapshot stamp.
        let now = self.clock.now();
        let principals = self.enrich_at(inactivity_days, now).await?;
        let summary = CatalogSummary::from_principals(&principals);

        let event = self.evidence.construct_catalog_snapshot_event(
            context,
            CatalogSnapshotEvidence {
                total_principals: principals.len(),
                orphan_count: summary.orphan_count,
                inactive_count: summary.inactive_count,
                risk_distribution: &summary.risk_distribution,
            },
        );
        if let Err(error) = self.audit_repository.save_event(&event).await {
            warn!(correlation_id = %context.trace_id(), %error, "failed to record catalog snapshot event");
        }

        info!(
            correlation_id = %context.trace_id(),
            total = principals.len(),
            orphans = summary.orphan_count,
            inactive = summary.inactive_count,
            "catalog snapshot exported"
        );

        Ok(CatalogSnapshot {
            timestamp: now,
            total_principals: principals.len(),
            principals,
            summary,
        })
    }
}
