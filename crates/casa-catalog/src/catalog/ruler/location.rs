use super::{FloatRange, PropertyRule, RuleViolation};
use crate::catalog::domain::Property;

const LONGITUDE_DOMAIN: FloatRange = FloatRange::new(-180.0, 180.0);
const LATITUDE_DOMAIN: FloatRange = FloatRange::new(-90.0, 90.0);

/// Rejects coordinates outside the planet's longitude/latitude domain.
#[derive(Debug, Clone, Copy)]
pub struct LocationRule {
    longitude: FloatRange,
    latitude: FloatRange,
}

impl LocationRule {
    pub fn new() -> Self {
        Self {
            longitude: LONGITUDE_DOMAIN,
            latitude: LATITUDE_DOMAIN,
        }
    }
}

impl Default for LocationRule {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRule for LocationRule {
    fn name(&self) -> &'static str {
        "location"
    }

    fn validate(&self, property: &mut Property) -> Result<(), RuleViolation> {
        let location = property.location;
        if self.longitude.contains(location.longitude) && self.latitude.contains(location.latitude)
        {
            return Ok(());
        }

        Err(RuleViolation::LocationOutOfBounds {
            longitude: location.longitude,
            latitude: location.latitude,
        })
    }
}
