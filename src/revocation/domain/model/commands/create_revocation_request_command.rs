use crate::revocation::domain::model::{
    enums::revocation_domain_error::RevocationDomainError,
    value_objects::revocation_subject::RevocationSubject,
};

#[derive(Clone, Debug)]
pub struct CreateRevocationRequestCommand {
    subject: RevocationSubject,
    scope: String,
    reason: Option<String>,
    initiated_by: Option<String>,
}

pub struct CreateRevocationRequestCommandParts {
    pub subject_type: String,
    pub subject_id: String,
    pub scope: String,
    pub reason: Option<String>,
    pub initiated_by: Option<String>,
}

impl CreateRevocationRequestCommand {
    pub fn new(parts: CreateRevocationRequestCommandParts) -> Result<Self, RevocationDomainError> {
        let scope = parts.scope.trim();
        if scope.is_empty() {
            return Err(RevocationDomainError::InvalidScope);
        }

        Ok(Self {
            subject: RevocationSubject::new(parts.subject_type, parts.subject_id)?,
            scope: scope.to_string(),
            reason: parts.reason.filter(|r| !r.trim().is_empty()),
            initiated_by: parts.initiated_by.filter(|i| !i.trim().is_empty()),
        })
    }

    pub fn subject(&self) -> &RevocationSubject {
        &self.subject
    }
    pub fn scope(&self) -> &str {
        &self.scope
    }
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
    pub fn initiated_by(&self) -> Option<&str> {
        self.initiated_by.as_deref()
    }
}
