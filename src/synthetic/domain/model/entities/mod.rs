pub mod synthetic_test_result;
pub mod synthetic_test_summary;
