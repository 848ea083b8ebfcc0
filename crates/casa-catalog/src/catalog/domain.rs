use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a listing once the repository stores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub i64);

/// Real-estate listing as classified and stored by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: Location,
    pub pricing: Pricing,
    pub property_type: PropertyType,
    pub bedrooms: i32,
    pub bathrooms: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_spots: Option<i32>,
    pub area: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: PropertyStatus,
}

/// Coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub sale_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_fee: Option<i64>,
}

/// Declared kind of property. Types without configured rules deserialize as `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    House,
    Apartment,
    #[serde(other)]
    Unrecognized,
}

impl PropertyType {
    /// Types that carry a rule bundle in the business rules table.
    pub const CONFIGURED: [PropertyType; 2] = [PropertyType::House, PropertyType::Apartment];

    /// Case-insensitive parse used by request mapping; unknown tags are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "HOUSE" => Some(Self::House),
            "APARTMENT" => Some(Self::Apartment),
            _ => None,
        }
    }

    /// Slot in the fixed-size rule table, `None` for types without rules.
    pub const fn table_index(self) -> Option<usize> {
        match self {
            PropertyType::House => Some(0),
            PropertyType::Apartment => Some(1),
            PropertyType::Unrecognized => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::House => "HOUSE",
            PropertyType::Apartment => "APARTMENT",
            PropertyType::Unrecognized => "UNRECOGNIZED",
        }
    }
}

/// Catalog classification of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Unset,
    Active,
    Inactive,
    Invalid,
}

impl PropertyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyStatus::Unset => "UNSET",
            PropertyStatus::Active => "ACTIVE",
            PropertyStatus::Inactive => "INACTIVE",
            PropertyStatus::Invalid => "INVALID",
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesPage {
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total: i64,
    pub data: Vec<Property>,
}
