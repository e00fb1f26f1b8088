use std::collections::BTreeMap;

use agentcore_governance::authorization::{
    domain::model::{
        commands::set_authorized_tools_command::SetAuthorizedToolsCommand,
        entities::{
            approval_record::ApprovalRecord,
            tool_classification_registry::ToolClassificationRegistry,
        },
        enums::classification_tier::ClassificationTier,
    },
    interfaces::handlers::resources::update_agent_tools_resource::UpdateAgentToolsRequestResource,
};
use chrono::{TimeZone, Utc};

pub fn tool_registry() -> ToolClassificationRegistry {
    ToolClassificationRegistry::new()
        .with_tool("get_product_info", ClassificationTier::Low)
        .with_tool("search_documentation", ClassificationTier::Low)
        .with_tool("check_warranty", ClassificationTier::Moderate)
        .with_tool("web_search", ClassificationTier::Moderate)
        .with_tool("update_customer_record", ClassificationTier::Sensitive)
}

pub fn approval_for(tool_id: &str) -> BTreeMap<String, ApprovalRecord> {
    BTreeMap::from([(
        tool_id.to_string(),
        ApprovalRecord::new(
            "security-lead@example.com",
            Utc.with_ymd_and_hms(2025, 11, 1, 10, 0, 0)
                .single()
                .expect("valid timestamp"),
            "Tier-2 support needs record updates",
        ),
    )])
}

fn tools(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

pub fn set_tools_command(agent_id: &str, values: &[&str], reason: &str) -> SetAuthorizedToolsCommand {
    SetAuthorizedToolsCommand::new(agent_id.to_string(), tools(values), reason.to_string())
        .expect("valid set command")
}

pub fn update_request(agent_id: &str, values: &[&str], reason: &str) -> UpdateAgentToolsRequestResource {
    UpdateAgentToolsRequestResource {
        agent_id: agent_id.to_string(),
        tools: tools(values),
        reason: reason.to_string(),
        validate_classification: true,
        approval_records: BTreeMap::new(),
    }
}

pub fn update_request_without_validation(
    agent_id: &str,
    values: &[&str],
    reason: &str,
) -> UpdateAgentToolsRequestResource {
    UpdateAgentToolsRequestResource {
        validate_classification: false,
        ..update_request(agent_id, values, reason)
    }
}
