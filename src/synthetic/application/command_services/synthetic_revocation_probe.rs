use std::time::{Duration, Instant};

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    revocation::{
        domain::model::enums::revocation_domain_error::RevocationDomainError,
        interfaces::handlers::{
            resources::revocation_request_resource::RevocationRequestResource,
            revocation_handler::RevocationHandler,
        },
    },
    shared::domain::model::value_objects::correlation_context::CorrelationContext,
    synthetic::domain::model::entities::{
        synthetic_test_result::SyntheticTestResult, synthetic_test_summary::SyntheticTestSummary,
    },
};

pub const SYNTHETIC_USER: &str = "synthetic-probe";
pub const SYNTHETIC_ACCESS_ACTION: &str = "synthetic_access_check";
const SYNTHETIC_SUBJECT_TYPE: &str = "user";
const SYNTHETIC_SCOPE: &str = "synthetic_access";

struct ProbeOutcome {
    revocation_id: String,
    propagation_latency_ms: u64,
    sla_met: bool,
    access_blocked: bool,
}

/// Drives the revocation handler the way an external caller would and reports
/// whether the subject was actually blocked.
#[derive(Clone)]
pub struct SyntheticRevocationProbe {
    handler: RevocationHandler,
    propagation_delay: Duration,
}

impl SyntheticRevocationProbe {
    pub fn new(handler: RevocationHandler) -> Self {
        Self {
            handler,
            propagation_delay: Duration::ZERO,
        }
    }

    /// Waits this long between the request and the propagation step.
    pub fn with_propagation_delay(mut self, propagation_delay: Duration) -> Self {
        self.propagation_delay = propagation_delay;
        self
    }

    pub async fn run_revocation_test(
        &self,
        subject_type: &str,
        subject_id: &str,
        scope: &str,
    ) -> SyntheticTestResult {
        let test_id = Uuid::now_v7().to_string();
        let context = CorrelationContext::anonymous().with_user(SYNTHETIC_USER);
        let started = Instant::now();

        let outcome = self
            .execute(subject_type, subject_id, scope, &context)
            .await;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        match outcome {
            Ok(outcome) => {
                if !outcome.access_blocked {
                    warn!(
                        test_id = %test_id,
                        revocation_id = %outcome.revocation_id,
                        subject_type,
                        subject_id,
                        "synthetic subject was not blocked after revocation"
                    );
                }

                SyntheticTestResult {
                    test_id,
                    subject_type: subject_type.to_string(),
                    subject_id: subject_id.to_string(),
                    revocation_id: Some(outcome.revocation_id),
                    access_blocked: outcome.access_blocked,
                    sla_met: outcome.sla_met,
                    latency_ms,
                    propagation_latency_ms: Some(outcome.propagation_latency_ms),
                    test_passed: outcome.access_blocked,
                    error: None,
                }
            }
            Err(error) => {
                warn!(test_id = %test_id, subject_type, subject_id, %error, "synthetic revocation test failed");

                SyntheticTestResult {
                    test_id,
                    subject_type: subject_type.to_string(),
                    subject_id: subject_id.to_string(),
                    revocation_id: None,
                    access_blocked: false,
                    sla_met: false,
                    latency_ms,
                    propagation_latency_ms: None,
                    test_passed: false,
                    error: Some(error.to_string()),
                }
            }
        }
    }

    /// Runs `count` transactions sequentially, each against a fresh subject.
    pub async fn run_multiple_tests(&self, count: usize) -> SyntheticTestSummary {
        let run_id = Uuid::now_v7().simple().to_string();
        let mut results = Vec::with_capacity(count);

        for index in 0..count {
            let subject_id = format!("synthetic-{run_id}-{index}");
            results.push(
                self.run_revocation_test(SYNTHETIC_SUBJECT_TYPE, &subject_id, SYNTHETIC_SCOPE)
                    .await,
            );
        }

        let summary = SyntheticTestSummary::from_results(results);
        info!(
            total = summary.total_tests,
            passed = summary.passed,
            failed = summary.failed,
            avg_latency_ms = summary.avg_latency_ms,
            sla_compliance_rate = summary.sla_compliance_rate,
            "synthetic revocation suite finished"
        );
        summary
    }

    async fn execute(
        &self,
        subject_type: &str,
        subject_id: &str,
        scope: &str,
        context: &CorrelationContext,
    ) -> Result<ProbeOutcome, RevocationDomainError> {
        let created = self
            .handler
            .handle_revocation_request(
                RevocationRequestResource {
                    subject_type: subject_type.to_string(),
                    subject_id: subject_id.to_string(),
                    scope: scope.to_string(),
                    reason: Some("synthetic revocation test".to_string()),
                    initiated_by: Some(SYNTHETIC_USER.to_string()),
                },
                context,
            )
            .await?;

        if !self.propagation_delay.is_zero() {
            tokio::time::sleep(self.propagation_delay).await;
        }

        let propagated = self
            .handler
            .handle_revocation_propagate(&created.revocation_id, context)
            .await?;

        let access_blocked = self
            .handler
            .check_subject_revoked(subject_type, subject_id, SYNTHETIC_ACCESS_ACTION, context)
            .await?;

        Ok(ProbeOutcome {
            revocation_id: created.revocation_id,
            propagation_latency_ms: propagated.propagation_latency_ms,
            sla_met: propagated.sla_met,
            access_blocked,
        })
    }
}
