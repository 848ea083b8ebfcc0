use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use super::domain::{PropertiesPage, Property, PropertyId};
use super::search::PropertySearchParams;

/// Storage abstraction so the catalog use cases can be exercised in isolation.
pub trait PropertyRepository: Send + Sync {
    /// Persists a new listing, assigning its identifier and timestamps.
    fn save(&self, property: Property) -> Result<Property, RepositoryError>;
    /// Replaces an existing listing. Unknown identifiers yield [`RepositoryError::NotFound`].
    fn update(&self, property: Property) -> Result<Property, RepositoryError>;
    fn fetch(&self, id: PropertyId) -> Result<Option<Property>, RepositoryError>;
    /// Returns one page of matches, most recently updated first. `total_pages` is left
    /// for the caller to compute.
    fn filter(&self, search: &PropertySearchParams) -> Result<PropertiesPage, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("property not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository used by the service binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryPropertyRepository {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    revision: u64,
    records: BTreeMap<PropertyId, StoredProperty>,
}

/// Stored listing tagged with a write counter so ordering by recency is stable.
#[derive(Debug)]
struct StoredProperty {
    revision: u64,
    property: Property,
}

impl MemoryState {
    fn next_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

impl InMemoryPropertyRepository {
    fn state(&self) -> Result<MutexGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.state()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl PropertyRepository for InMemoryPropertyRepository {
    fn save(&self, mut property: Property) -> Result<Property, RepositoryError> {
        let mut state = self.state()?;
        state.last_id += 1;
        let revision = state.next_revision();
        let now = Utc::now();
        property.id = PropertyId(state.last_id);
        property.created_at = Some(now);
        property.updated_at = Some(now);
        state.records.insert(
            property.id,
            StoredProperty {
                revision,
                property: property.clone(),
            },
        );
        Ok(property)
    }

    fn update(&self, mut property: Property) -> Result<Property, RepositoryError> {
        let mut state = self.state()?;
        let created_at = state
            .records
            .get(&property.id)
            .ok_or(RepositoryError::NotFound)?
            .property
            .created_at;
        let revision = state.next_revision();
        property.created_at = created_at;
        property.updated_at = Some(Utc::now());
        state.records.insert(
            property.id,
            StoredProperty {
                revision,
                property: property.clone(),
            },
        );
        Ok(property)
    }

    fn fetch(&self, id: PropertyId) -> Result<Option<Property>, RepositoryError> {
        Ok(self
            .state()?
            .records
            .get(&id)
            .map(|stored| stored.property.clone()))
    }

    fn filter(&self, search: &PropertySearchParams) -> Result<PropertiesPage, RepositoryError> {
        let state = self.state()?;
        let mut matches: Vec<&StoredProperty> = state
            .records
            .values()
            .filter(|stored| search.status.matches(stored.property.status))
            .filter(|stored| {
                search
                    .bbox
                    .map_or(true, |bbox| bbox.contains(&stored.property.location))
            })
            .collect();
        matches.sort_by_key(|stored| Reverse(stored.revision));

        let total = matches.len() as i64;
        let data = matches
            .into_iter()
            .skip(search.offset())
            .take(search.limit())
            .map(|stored| stored.property.clone())
            .collect();

        Ok(PropertiesPage {
            page: search.page,
            page_size: search.page_size,
            total_pages: 0,
            total,
            data,
        })
    }
}
