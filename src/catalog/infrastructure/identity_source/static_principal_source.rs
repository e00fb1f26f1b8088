use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::catalog::{
    domain::model::entities::principal::Principal,
    infrastructure::identity_source::principal_source::{
        PrincipalSource, PrincipalSourceError, PrincipalSourcePage,
    },
};

#[derive(Deserialize)]
struct PrincipalInventoryDocument {
    principals: Vec<Principal>,
}

/// Serves an already-fetched inventory in fixed-size pages.
pub struct StaticPrincipalSource {
    principals: Vec<Principal>,
    page_size: usize,
}

impl StaticPrincipalSource {
    pub fn new(principals: Vec<Principal>, page_size: usize) -> Self {
        Self {
            principals,
            page_size: page_size.max(1),
        }
    }

    /// Reads `{"principals": [...]}` from a JSON export.
    pub fn from_json_file(path: &Path, page_size: usize) -> Result<Self, PrincipalSourceError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PrincipalSourceError::InventoryUnreadable(e.to_string()))?;
        let document: PrincipalInventoryDocument = serde_json::from_str(&raw)
            .map_err(|e| PrincipalSourceError::InventoryUnreadable(e.to_string()))?;

        Ok(Self::new(document.principals, page_size))
    }
}

#[async_trait]
impl PrincipalSource for StaticPrincipalSource {
    async fn list_principals(
        &self,
        marker: Option<String>,
    ) -> Result<PrincipalSourcePage, PrincipalSourceError> {
        let offset = match marker {
            None => 0,
            Some(marker) => marker
                .parse::<usize>()
                .map_err(|_| PrincipalSourceError::InvalidMarker(marker.clone()))?,
        };

        let end = (offset + self.page_size).min(self.principals.len());
        let principals = self
            .principals
            .get(offset..end)
            .map(<[Principal]>::to_vec)
            .unwrap_or_default();

        Ok(PrincipalSourcePage {
            principals,
            next_marker: (end < self.principals.len()).then(|| end.to_string()),
        })
    }
}
