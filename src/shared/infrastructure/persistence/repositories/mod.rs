pub mod audit_event_repository;
pub mod in_memory;
