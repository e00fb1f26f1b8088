use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct AgentToolsResource {
    pub agent_id: String,
    pub authorized_tools: Vec<String>,
    pub total_count: usize,
}
