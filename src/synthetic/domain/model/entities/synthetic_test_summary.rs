use serde::Serialize;

use crate::synthetic::domain::model::entities::synthetic_test_result::SyntheticTestResult;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SyntheticTestSummary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub avg_latency_ms: f64,
    pub sla_compliance_rate: f64,
    pub individual_results: Vec<SyntheticTestResult>,
}

impl SyntheticTestSummary {
    pub fn from_results(individual_results: Vec<SyntheticTestResult>) -> Self {
        let total_tests = individual_results.len();
        let passed = individual_results.iter().filter(|r| r.test_passed).count();
        let sla_met = individual_results.iter().filter(|r| r.sla_met).count();

        let (avg_latency_ms, sla_compliance_rate) = if total_tests == 0 {
            (0.0, 0.0)
        } else {
            let total_latency: f64 = individual_results.iter().map(|r| r.latency_ms).sum();
            (
                total_latency / total_tests as f64,
                100.0 * sla_met as f64 / total_tests as f64,
            )
        };

        Self {
            total_tests,
            passed,
            failed: total_tests - passed,
            avg_latency_ms,
            sla_compliance_rate,
            individual_results,
        }
    }
}
