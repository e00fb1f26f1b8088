use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const WILDCARD: char = '*';

/// Governance tags carried by a principal. Keys other than the three named
/// ones are kept in `extra` and never inspected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrincipalTags {
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(rename = "Purpose", default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(
        rename = "Environment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub environment: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl PolicyStatement {
    pub fn wildcard_action_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| action.contains(WILDCARD))
            .count()
    }

    pub fn wildcard_resource_count(&self) -> usize {
        self.resources
            .iter()
            .filter(|resource| resource.contains(WILDCARD))
            .count()
    }
}

/// Identity or role record as exported by the identity source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub arn: String,
    pub name: String,
    #[serde(default)]
    pub tags: PrincipalTags,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(default)]
    pub policy_statements: Vec<PolicyStatement>,
}

impl Principal {
    pub fn owner_tag(&self) -> Option<&str> {
        self.tags.owner.as_deref()
    }

    pub fn environment(&self) -> Option<&str> {
        self.tags.environment.as_deref()
    }

    pub fn wildcard_action_count(&self) -> usize {
        self.policy_statements
            .iter()
            .map(PolicyStatement::wildcard_action_count)
            .sum()
    }

    pub fn wildcard_resource_count(&self) -> usize {
        self.policy_statements
            .iter()
            .map(PolicyStatement::wildcard_resource_count)
            .sum()
    }

    pub fn uses_wildcards(&self) -> bool {
        self.wildcard_action_count() > 0 || self.wildcard_resource_count() > 0
    }
}
