
pub use fakes::FakeClock;
pub use fixtures::{fixed_instant, revocation_request_evidence};
pub use harness::create_evidence_harness;
