use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::revocation::domain::model::entities::revocation_record::RevocationRecord;

pub const SLA_METRIC_NAME: &str = "RevocationSLACompliance";
pub const SLA_METRIC_NAMESPACE: &str = "AgentCoreGovernance";
pub const SLA_METRIC_UNIT: &str = "Percent";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlaMetrics {
    pub total_revocations: usize,
    pub sla_met_count: usize,
    pub sla_breached_count: usize,
    pub sla_compliance_rate: f64,
}

impl SlaMetrics {
    /// Aggregates propagated records only; pending ones have no outcome yet.
    pub fn from_records(records: &[RevocationRecord]) -> Self {
        let outcomes = records
            .iter()
            .filter_map(|record| record.sla_met)
            .collect::<Vec<_>>();
        let total_revocations = outcomes.len();
        let sla_met_count = outcomes.iter().filter(|met| **met).count();

        let sla_compliance_rate = if total_revocations == 0 {
            0.0
        } else {
            100.0 * sla_met_count as f64 / total_revocations as f64
        };

        Self {
            total_revocations,
            sla_met_count,
            sla_breached_count: total_revocations - sla_met_count,
            sla_compliance_rate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlaMetricDatum {
    pub metric_name: String,
    pub namespace: String,
    pub dimensions: BTreeMap<String, String>,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
}
