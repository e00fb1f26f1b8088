pub mod evidence_error;
