use crate::revocation::domain::model::enums::revocation_domain_error::RevocationDomainError;

/// The `(subject_type, subject_id)` pair a revocation applies to. Both parts
/// are trimmed, on write and on lookup; matching is exact after that.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RevocationSubject {
    subject_type: String,
    subject_id: String,
}

impl RevocationSubject {
    pub fn new(subject_type: String, subject_id: String) -> Result<Self, RevocationDomainError> {
        let subject_type = subject_type.trim();
        if subject_type.is_empty() {
            return Err(RevocationDomainError::InvalidSubjectType);
        }
        let subject_id = subject_id.trim();
        if subject_id.is_empty() {
            return Err(RevocationDomainError::InvalidSubjectId);
        }

        Ok(Self {
            subject_type: subject_type.to_string(),
            subject_id: subject_id.to_string(),
        })
    }

    pub fn subject_type(&self) -> &str {
        &self.subject_type
    }
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }
}
