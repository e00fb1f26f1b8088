use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct RevocationPropagatedResource {
    pub revocation_id: String,
    pub propagation_latency_ms: u64,
    pub sla_met: bool,
    pub correlation_id: String,
}
