pub mod approval_record;
pub mod authorization_change_report;
pub mod authorization_history_entry;
pub mod tool_classification_registry;
