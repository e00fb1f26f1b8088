pub mod agent_tools_resource;
pub mod tool_access_decision_resource;
pub mod update_agent_tools_resource;
