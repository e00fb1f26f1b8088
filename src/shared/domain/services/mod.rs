pub mod evidence_constructor;
