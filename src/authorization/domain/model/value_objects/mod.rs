pub mod agent_id;
pub mod tool_id;
