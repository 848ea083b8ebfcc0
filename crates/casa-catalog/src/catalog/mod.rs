//! Listing catalog: request mapping, classification rules, search and the HTTP surface.

pub mod domain;
pub mod repository;
pub mod request;
pub mod router;
pub mod ruler;
pub mod search;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Location, Pricing, PropertiesPage, Property, PropertyId, PropertyStatus, PropertyType,
};
pub use repository::{InMemoryPropertyRepository, PropertyRepository, RepositoryError};
pub use request::{PricingRequest, PropertyRequest, RequestError};
pub use router::{property_router, ErrorBody};
pub use ruler::{PropertyClassifier, PropertyRule, PropertyRuler, RuleViolation};
pub use search::{BoundingBox, PropertySearchParams, SearchParamsError, StatusFilter};
pub use service::{CatalogServiceError, PropertyCatalogService};
