use std::collections::BTreeMap;

use serde::Serialize;

pub const CORRELATION_HEADER: &str = "X-Correlation-Id";

/// Trace identity for one governance operation.
///
/// A context is created at the edge of an operation and passed by reference
/// to every call that emits evidence, so all audit events produced by the
/// operation share its `trace_id`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CorrelationContext {
    trace_id: String,
    user: Option<String>,
    agent: Option<String>,
    tool: Option<String>,
}

impl CorrelationContext {
    pub fn new(user: Option<String>, agent: Option<String>, tool: Option<String>) -> Self {
        Self {
            trace_id: Self::generate_trace_id(),
            user,
            agent,
            tool,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None, None, None)
    }

    /// Adopts a trace id minted by a caller outside this process.
    pub fn from_trace_id(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            user: None,
            agent: None,
            tool: None,
        }
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    fn generate_trace_id() -> String {
        format!("{:032x}", rand::random::<u128>())
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }

    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref()
    }

    pub fn to_headers(&self) -> BTreeMap<String, String> {
        let mut parts = vec![format!("trace={}", self.trace_id)];
        if let Some(user) = &self.user {
            parts.push(format!("user={user}"));
        }
        if let Some(agent) = &self.agent {
            parts.push(format!("agent={agent}"));
        }
        if let Some(tool) = &self.tool {
            parts.push(format!("tool={tool}"));
        }

        BTreeMap::from([(CORRELATION_HEADER.to_string(), parts.join(";"))])
    }
}
