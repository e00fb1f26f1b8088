use crate::authorization::domain::model::{
    entities::{approval_record::ApprovalRecord, tool_classification_registry::ToolClassificationRegistry},
    enums::classification_tier::ClassificationTier,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassificationDecision {
    pub authorized: bool,
    pub reason: String,
    pub tier: Option<ClassificationTier>,
}

/// Gate for adding a tool to an agent. Unknown tools are denied.
pub fn validate_tool_authorization(
    tool_id: &str,
    approval: Option<&ApprovalRecord>,
    registry: &ToolClassificationRegistry,
) -> ClassificationDecision {
    let Some(tier) = registry.classify(tool_id) else {
        return ClassificationDecision {
            authorized: false,
            reason: format!("{tool_id} has no classification; denied by default"),
            tier: None,
        };
    };

    let (authorized, reason) = match (tier.requires_approval(), approval) {
        (false, _) => (
            true,
            format!("{tool_id} classified as {tier}; approval not required"),
        ),
        (true, None) => (
            false,
            format!("{tool_id} classified as {tier}; approval record required"),
        ),
        (true, Some(record)) => (
            true,
            format!(
                "{tool_id} classified as {tier}; approved by {} at {}",
                record.approved_by,
                record.approved_at.to_rfc3339()
            ),
        ),
    };

    ClassificationDecision {
        authorized,
        reason,
        tier: Some(tier),
    }
}
