pub mod revocation_record;
pub mod sla_metrics;
