use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::revocation::domain::model::enums::revocation_domain_error::RevocationDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct RevocationId(String);

impl RevocationId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn new(value: String) -> Result<Self, RevocationDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RevocationDomainError::InvalidRevocationId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
