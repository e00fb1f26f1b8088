use crate::catalog::domain::model::enums::catalog_domain_error::CatalogDomainError;

pub const MAX_PAGE_SIZE: usize = 1000;

#[derive(Clone, Debug)]
pub struct ListPrincipalsQuery {
    environments: Option<Vec<String>>,
    owner: Option<String>,
    page: usize,
    page_size: usize,
}

pub struct ListPrincipalsQueryParts {
    pub environments: Option<Vec<String>>,
    pub owner: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl ListPrincipalsQuery {
    pub fn new(parts: ListPrincipalsQueryParts) -> Result<Self, CatalogDomainError> {
        if parts.page == 0 {
            return Err(CatalogDomainError::InvalidPage);
        }
        if parts.page_size == 0 || parts.page_size > MAX_PAGE_SIZE {
            return Err(CatalogDomainError::InvalidPageSize { max: MAX_PAGE_SIZE });
        }

        let environments = parts.environments.map(|environments| {
            environments
                .into_iter()
                .map(|environment| environment.trim().to_string())
                .filter(|environment| !environment.is_empty())
                .collect::<Vec<_>>()
        });

        Ok(Self {
            environments: environments.filter(|environments| !environments.is_empty()),
            owner: parts
                .owner
                .map(|owner| owner.trim().to_string())
                .filter(|owner| !owner.is_empty()),
            page: parts.page,
            page_size: parts.page_size,
        })
    }

    pub fn environments(&self) -> Option<&[String]> {
        self.environments.as_deref()
    }
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
    pub fn page(&self) -> usize {
        self.page
    }
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
