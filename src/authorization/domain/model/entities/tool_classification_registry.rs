use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::authorization::domain::model::enums::{
    authorization_domain_error::AuthorizationDomainError, classification_tier::ClassificationTier,
};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ToolClassification {
    pub tier: ClassificationTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Read-only tool to tier mapping. Tools missing from the registry have no
/// tier and are never authorized through it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ToolClassificationRegistry {
    #[serde(default)]
    tools: BTreeMap<String, ToolClassification>,
}

impl ToolClassificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, tool_id: impl Into<String>, tier: ClassificationTier) -> Self {
        self.tools.insert(
            tool_id.into(),
            ToolClassification {
                tier,
                description: None,
            },
        );
        self
    }

    /// Loads `{"tools": {"<tool_id>": {"tier": "LOW", "description": ".."}}}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AuthorizationDomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AuthorizationDomainError::RegistryUnreadable(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AuthorizationDomainError> {
        serde_json::from_str(raw)
            .map_err(|e| AuthorizationDomainError::RegistryUnreadable(e.to_string()))
    }

    pub fn classify(&self, tool_id: &str) -> Option<ClassificationTier> {
        self.tools.get(tool_id).map(|entry| entry.tier)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
