use agentcore_governance::revocation::interfaces::handlers::resources::revocation_request_resource::RevocationRequestResource;

pub fn revocation_payload(subject_type: &str, subject_id: &str, scope: &str) -> RevocationRequestResource {
    RevocationRequestResource {
        subject_type: subject_type.to_string(),
        subject_id: subject_id.to_string(),
        scope: scope.to_string(),
        reason: None,
        initiated_by: None,
    }
}

pub fn user_payload(subject_id: &str) -> RevocationRequestResource {
    revocation_payload("user", subject_id, "user_access")
}
