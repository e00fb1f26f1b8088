pub mod set_authorized_tools_command;
pub mod update_agent_tools_command;
