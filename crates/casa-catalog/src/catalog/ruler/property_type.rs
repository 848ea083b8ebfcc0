use super::{PropertyRule, RuleViolation};
use crate::catalog::domain::{Property, PropertyType};
use crate::config::{BusinessRules, PropertyTypeRules};

/// Checks declared attributes against the bundle configured for the listing's type.
///
/// Bundles live in a fixed-size table indexed by [`PropertyType::table_index`];
/// a type without a slot has no checks and passes.
#[derive(Debug, Clone)]
pub struct PropertyTypeRule {
    table: [PropertyTypeRules; 2],
}

impl PropertyTypeRule {
    pub fn new(config: &BusinessRules) -> Self {
        Self {
            table: [config.house, config.apartment],
        }
    }

    fn rules_for(&self, property_type: PropertyType) -> Option<&PropertyTypeRules> {
        property_type
            .table_index()
            .and_then(|index| self.table.get(index))
    }
}

impl PropertyRule for PropertyTypeRule {
    fn name(&self) -> &'static str {
        "property_type"
    }

    fn validate(&self, property: &mut Property) -> Result<(), RuleViolation> {
        let Some(rules) = self.rules_for(property.property_type) else {
            return Ok(());
        };

        if !rules.bedrooms.contains(i64::from(property.bedrooms)) {
            return Err(RuleViolation::BedroomsOutOfRange {
                found: property.bedrooms,
                allowed: rules.bedrooms,
            });
        }

        if !rules.bathrooms.contains(i64::from(property.bathrooms)) {
            return Err(RuleViolation::BathroomsOutOfRange {
                found: property.bathrooms,
                allowed: rules.bathrooms,
            });
        }

        if !rules.area.contains(i64::from(property.area)) {
            return Err(RuleViolation::AreaOutOfRange {
                found: property.area,
                allowed: rules.area,
            });
        }

        if let Some(spots) = property.parking_spots {
            if i64::from(spots) < rules.min_parking_spots {
                return Err(RuleViolation::InsufficientParkingSpots {
                    found: spots,
                    minimum: rules.min_parking_spots,
                });
            }
        }

        Ok(())
    }
}
