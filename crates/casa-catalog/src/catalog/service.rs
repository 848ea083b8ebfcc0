use std::sync::Arc;

use tracing::info;

use super::domain::{PropertiesPage, Property, PropertyId};
use super::repository::{PropertyRepository, RepositoryError};
use super::ruler::PropertyClassifier;
use super::search::PropertySearchParams;

/// Create, update and search use cases over the listing catalog.
pub struct PropertyCatalogService<R, C> {
    repository: Arc<R>,
    classifier: Arc<C>,
}

impl<R, C> PropertyCatalogService<R, C>
where
    R: PropertyRepository + 'static,
    C: PropertyClassifier + 'static,
{
    pub fn new(repository: Arc<R>, classifier: Arc<C>) -> Self {
        Self {
            repository,
            classifier,
        }
    }

    /// Classify and store a new listing. INVALID listings are stored as-is.
    pub fn create(&self, mut property: Property) -> Result<Property, CatalogServiceError> {
        self.classifier.execute(&mut property);
        let stored = self.repository.save(property)?;

        info!(
            property_id = stored.id.0,
            status = stored.status.label(),
            "listing created"
        );
        Ok(stored)
    }

    /// Re-classify and replace the listing stored under `id`.
    pub fn update(
        &self,
        id: PropertyId,
        mut property: Property,
    ) -> Result<Property, CatalogServiceError> {
        property.id = id;
        self.classifier.execute(&mut property);
        let stored = self.repository.update(property)?;

        info!(
            property_id = stored.id.0,
            status = stored.status.label(),
            "listing updated"
        );
        Ok(stored)
    }

    pub fn search(
        &self,
        params: &PropertySearchParams,
    ) -> Result<PropertiesPage, CatalogServiceError> {
        let mut page = self.repository.filter(params)?;
        page.total_pages = total_pages(page.total, page.page_size);

        info!(
            page = page.page,
            returned = page.data.len(),
            total = page.total,
            "listing search served"
        );
        Ok(page)
    }
}

fn total_pages(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
