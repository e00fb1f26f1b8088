use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::revocation::{
    domain::model::{
        entities::revocation_record::RevocationRecord,
        enums::revocation_domain_error::RevocationDomainError,
        value_objects::{revocation_id::RevocationId, revocation_subject::RevocationSubject},
    },
    infrastructure::persistence::repositories::revocation_repository::RevocationRepository,
};

#[derive(Default)]
struct RevocationState {
    records: HashMap<RevocationId, RevocationRecord>,
    order: Vec<RevocationId>,
}

impl RevocationState {
    fn ordered(&self) -> impl Iterator<Item = &RevocationRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }
}

#[derive(Default)]
pub struct InMemoryRevocationRepository {
    state: RwLock<RevocationState>,
}

impl InMemoryRevocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevocationRepository for InMemoryRevocationRepository {
    async fn save(&self, record: &RevocationRecord) -> Result<(), RevocationDomainError> {
        let mut state = self.state.write().await;
        if state.records.contains_key(&record.revocation_id) {
            return Err(RevocationDomainError::InfrastructureError(format!(
                "duplicate revocation id {}",
                record.revocation_id
            )));
        }
        state.order.push(record.revocation_id.clone());
        state
            .records
            .insert(record.revocation_id.clone(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &RevocationRecord) -> Result<(), RevocationDomainError> {
        let mut state = self.state.write().await;
        match state.records.get_mut(&record.revocation_id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(RevocationDomainError::RevocationNotFound(
                record.revocation_id.to_string(),
            )),
        }
    }

    async fn find_by_id(
        &self,
        revocation_id: &RevocationId,
    ) -> Result<Option<RevocationRecord>, RevocationDomainError> {
        Ok(self.state.read().await.records.get(revocation_id).cloned())
    }

    async fn find_by_subject(
        &self,
        subject: &RevocationSubject,
    ) -> Result<Vec<RevocationRecord>, RevocationDomainError> {
        Ok(self
            .state
            .read()
            .await
            .ordered()
            .filter(|record| record.applies_to(subject))
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<RevocationRecord>, RevocationDomainError> {
        Ok(self.state.read().await.ordered().cloned().collect())
    }

    #[cfg(any(test, feature = "test-support"))]
    async fn clear(&self) -> Result<(), RevocationDomainError> {
        let mut state = self.state.write().await;
        state.records.clear();
        state.order.clear();
        Ok(())
    }
}
