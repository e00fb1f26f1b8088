use serde::Serialize;

/// Outcome of one request, propagate, access-check transaction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SyntheticTestResult {
    pub test_id: String,
    pub subject_type: String,
    pub subject_id: String,
    pub revocation_id: Option<String>,
    pub access_blocked: bool,
    pub sla_met: bool,
    pub latency_ms: f64,
    pub propagation_latency_ms: Option<u64>,
    pub test_passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
