use serde::{Deserialize, Serialize};

use super::domain::{Location, Pricing, Property, PropertyId, PropertyStatus, PropertyType};

/// Create/update payload as submitted by clients. Required fields are optional here so
/// omissions can be reported by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub pricing: PricingRequest,
    #[serde(default)]
    pub property_type: String,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub parking_spots: Option<i32>,
    pub area: Option<i32>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub sale_price: Option<i64>,
    pub administrative_fee: Option<i64>,
}

/// Errors raised while mapping a request into a listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("{0} field is a must")]
    MissingField(&'static str),
    #[error("property type not recognized [{0}]")]
    UnknownPropertyType(String),
}

impl PropertyRequest {
    /// Maps the payload into an unclassified listing.
    pub fn into_property(self) -> Result<Property, RequestError> {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .ok_or(RequestError::MissingField("title"))?;
        let bedrooms = self.bedrooms.ok_or(RequestError::MissingField("bedrooms"))?;
        let bathrooms = self
            .bathrooms
            .ok_or(RequestError::MissingField("bathrooms"))?;
        let sale_price = self
            .pricing
            .sale_price
            .ok_or(RequestError::MissingField("salePrice"))?;
        let area = self.area.ok_or(RequestError::MissingField("area"))?;
        let property_type = PropertyType::parse(&self.property_type).ok_or_else(|| {
            RequestError::UnknownPropertyType(self.property_type.to_ascii_uppercase())
        })?;

        Ok(Property {
            id: PropertyId::default(),
            title,
            description: self.description,
            location: self.location,
            pricing: Pricing {
                sale_price,
                administrative_fee: self.pricing.administrative_fee,
            },
            property_type,
            bedrooms,
            bathrooms,
            parking_spots: self.parking_spots,
            area,
            photos: self.photos,
            created_at: None,
            updated_at: None,
            status: PropertyStatus::Unset,
        })
    }
}
