pub mod in_memory_audit_event_repository;
