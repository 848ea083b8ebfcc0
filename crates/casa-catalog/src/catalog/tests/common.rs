use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::domain::{
    Location, PropertiesPage, Property, PropertyId, PropertyStatus, PropertyType, Pricing,
};
use crate::catalog::repository::{InMemoryPropertyRepository, PropertyRepository, RepositoryError};
use crate::catalog::ruler::{PropertyClassifier, PropertyRuler};
use crate::catalog::search::PropertySearchParams;
use crate::catalog::service::PropertyCatalogService;
use crate::config::BusinessRules;

pub(crate) const MILLION: i64 = 1_000_000;

/// Plausible house inside the reference bundle box with an in-band price.
pub(crate) fn listing() -> Property {
    Property {
        id: PropertyId::default(),
        title: "Casa en Coyoacán".to_string(),
        description: Some("Jardín y terraza".to_string()),
        location: Location {
            longitude: -99.1,
            latitude: 19.3,
        },
        pricing: Pricing {
            sale_price: 2 * MILLION,
            administrative_fee: None,
        },
        property_type: PropertyType::House,
        bedrooms: 3,
        bathrooms: 2,
        parking_spots: Some(1),
        area: 400,
        photos: vec!["https://cdn.example.com/fachada.jpg".to_string()],
        created_at: None,
        updated_at: None,
        status: PropertyStatus::Unset,
    }
}

pub(crate) fn listing_at(longitude: f64, latitude: f64) -> Property {
    let mut property = listing();
    property.location = Location {
        longitude,
        latitude,
    };
    property
}

pub(crate) fn priced_listing_at(longitude: f64, latitude: f64, sale_price: i64) -> Property {
    let mut property = listing_at(longitude, latitude);
    property.pricing.sale_price = sale_price;
    property
}

pub(crate) fn listing_of_type(property_type: PropertyType) -> Property {
    let mut property = listing();
    property.property_type = property_type;
    property
}

pub(crate) fn request_body() -> Value {
    serde_json::json!({
        "title": "Casa en Coyoacán",
        "location": { "longitude": -99.1, "latitude": 19.3 },
        "pricing": { "salePrice": 2 * MILLION },
        "propertyType": "HOUSE",
        "bedrooms": 3,
        "bathrooms": 2,
        "parkingSpots": 1,
        "area": 400
    })
}

pub(crate) type MemoryService = PropertyCatalogService<InMemoryPropertyRepository, PropertyRuler>;

pub(crate) fn build_service() -> (MemoryService, Arc<InMemoryPropertyRepository>) {
    let repository = Arc::new(InMemoryPropertyRepository::default());
    let ruler = Arc::new(PropertyRuler::new(&BusinessRules::reference()));
    (
        PropertyCatalogService::new(repository.clone(), ruler),
        repository,
    )
}

/// Classifier that stamps a fixed status, used to isolate the use cases from the rules.
pub(crate) struct FixedClassifier(pub PropertyStatus);

impl PropertyClassifier for FixedClassifier {
    fn execute(&self, property: &mut Property) {
        property.status = self.0;
    }
}

pub(crate) struct UnavailableRepository;

impl PropertyRepository for UnavailableRepository {
    fn save(&self, _property: Property) -> Result<Property, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _property: Property) -> Result<Property, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: PropertyId) -> Result<Option<Property>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn filter(&self, _search: &PropertySearchParams) -> Result<PropertiesPage, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
