use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::catalog::domain::PropertyType;
use crate::catalog::ruler::{FloatRange, IntRange};

const MILLION: i64 = 1_000_000;

/// Attribute plausibility bounds for one property type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyTypeRules {
    pub bedrooms: IntRange,
    pub bathrooms: IntRange,
    pub area: IntRange,
    /// Lowest accepted declared parking count. Listings without parking data always pass.
    #[serde(default)]
    pub min_parking_spots: i64,
}

/// Geographic rectangle selecting which sale price band applies to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BundleBox {
    pub longitude: FloatRange,
    pub latitude: FloatRange,
    pub price_in: IntRange,
    pub price_out: IntRange,
}

/// Process-wide thresholds consumed by the rule chain. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessRules {
    pub house: PropertyTypeRules,
    pub apartment: PropertyTypeRules,
    pub bundle_box: BundleBox,
}

impl BusinessRules {
    /// Thresholds for the Mexico City metro bundle.
    pub fn reference() -> Self {
        Self {
            house: PropertyTypeRules {
                bedrooms: IntRange::new(1, 14),
                bathrooms: IntRange::new(1, 12),
                area: IntRange::new(50, 3000),
                min_parking_spots: 0,
            },
            apartment: PropertyTypeRules {
                bedrooms: IntRange::new(1, 6),
                bathrooms: IntRange::new(1, 4),
                area: IntRange::new(40, 400),
                min_parking_spots: 1,
            },
            bundle_box: BundleBox {
                longitude: FloatRange::new(-99.296741, -98.916339),
                latitude: FloatRange::new(19.296134, 19.661237),
                price_in: IntRange::new(MILLION, 15 * MILLION),
                price_out: IntRange::new(50 * MILLION, 3500 * MILLION),
            },
        }
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let rules: BusinessRules =
            serde_yaml::from_str(raw).map_err(|source| ConfigError::RulesParse { source })?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::RulesRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Rule bundle for a declared type, `None` when the type has no configured rules.
    pub fn rules_for(&self, property_type: PropertyType) -> Option<&PropertyTypeRules> {
        match property_type {
            PropertyType::House => Some(&self.house),
            PropertyType::Apartment => Some(&self.apartment),
            PropertyType::Unrecognized => None,
        }
    }

    /// Rejects reversed ranges and negative parking minimums.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for property_type in PropertyType::CONFIGURED {
            let Some(rules) = self.rules_for(property_type) else {
                continue;
            };
            let label = property_type.label();
            ensure_ordered_int(rules.bedrooms, label, "bedrooms")?;
            ensure_ordered_int(rules.bathrooms, label, "bathrooms")?;
            ensure_ordered_int(rules.area, label, "area")?;
            if rules.min_parking_spots < 0 {
                return Err(ConfigError::NegativeParkingMinimum {
                    property_type: label,
                    value: rules.min_parking_spots,
                });
            }
        }

        let bundle = &self.bundle_box;
        ensure_ordered_float(bundle.longitude, "bundle_box", "longitude")?;
        ensure_ordered_float(bundle.latitude, "bundle_box", "latitude")?;
        ensure_ordered_int(bundle.price_in, "bundle_box", "price_in")?;
        ensure_ordered_int(bundle.price_out, "bundle_box", "price_out")?;
        Ok(())
    }
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self::reference()
    }
}

fn ensure_ordered_int(
    range: IntRange,
    section: &'static str,
    field: &'static str,
) -> Result<(), ConfigError> {
    if range.is_ordered() {
        Ok(())
    } else {
        Err(ConfigError::UnorderedRange {
            section,
            field,
            range: range.to_string(),
        })
    }
}

fn ensure_ordered_float(
    range: FloatRange,
    section: &'static str,
    field: &'static str,
) -> Result<(), ConfigError> {
    // NaN bounds fail `is_ordered` as well.
    if range.is_ordered() {
        Ok(())
    } else {
        Err(ConfigError::UnorderedRange {
            section,
            field,
            range: range.to_string(),
        })
    }
}
