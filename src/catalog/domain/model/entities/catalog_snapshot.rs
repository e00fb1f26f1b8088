use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::domain::model::{
    entities::enriched_principal::EnrichedPrincipal, enums::risk_rating::RiskRating,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub orphan_count: usize,
    pub inactive_count: usize,
    pub risk_distribution: BTreeMap<String, usize>,
}

impl CatalogSummary {
    pub fn from_principals(principals: &[EnrichedPrincipal]) -> Self {
        let mut risk_distribution = RiskRating::ALL
            .iter()
            .map(|rating| (rating.as_str().to_string(), 0))
            .collect::<BTreeMap<_, _>>();

        for principal in principals {
            *risk_distribution
                .entry(principal.risk_rating.as_str().to_string())
                .or_insert(0) += 1;
        }

        Self {
            orphan_count: principals.iter().filter(|p| p.is_orphan).count(),
            inactive_count: principals.iter().filter(|p| p.is_inactive).count(),
            risk_distribution,
        }
    }
}

/// Point-in-time export of the analyzed principal inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub timestamp: DateTime<Utc>,
    pub total_principals: usize,
    pub principals: Vec<EnrichedPrincipal>,
    pub summary: CatalogSummary,
}
