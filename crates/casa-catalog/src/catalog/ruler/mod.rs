//! Listing classification rules.
//!
//! A [`PropertyRuler`] runs location, property-type and price rules in that
//! order. The price rule assigns the provisional ACTIVE/INACTIVE status; any
//! violation makes the chain overwrite the status with INVALID. Violation
//! details are logged and then dropped.

mod location;
mod price;
mod property_type;
mod range;

pub use location::LocationRule;
pub use price::{PriceRule, PriceZone};
pub use property_type::PropertyTypeRule;
pub use range::{FloatRange, IntRange};

use tracing::debug;

use super::domain::{Property, PropertyStatus};
use crate::config::BusinessRules;

/// Reason a single rule rejected a listing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleViolation {
    #[error("location ({longitude}, {latitude}) is outside the valid coordinate domain")]
    LocationOutOfBounds { longitude: f64, latitude: f64 },
    #[error("bedrooms {found} outside allowed range {allowed}")]
    BedroomsOutOfRange { found: i32, allowed: IntRange },
    #[error("bathrooms {found} outside allowed range {allowed}")]
    BathroomsOutOfRange { found: i32, allowed: IntRange },
    #[error("area {found} outside allowed range {allowed}")]
    AreaOutOfRange { found: i32, allowed: IntRange },
    #[error("parking spots must be at least {minimum} (found {found})")]
    InsufficientParkingSpots { found: i32, minimum: i64 },
    #[error("sale price {found} outside the {zone} band {allowed}")]
    PriceOutOfRange {
        found: i64,
        allowed: IntRange,
        zone: PriceZone,
    },
}

/// Single business rule applied to a listing.
pub trait PropertyRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn validate(&self, property: &mut Property) -> Result<(), RuleViolation>;
}

/// Seam used by the create/update use cases so they can run with any classifier.
pub trait PropertyClassifier: Send + Sync {
    fn execute(&self, property: &mut Property);
}

/// Ordered rule chain with fail-fast, override-to-INVALID semantics.
pub struct PropertyRuler {
    rules: Vec<Box<dyn PropertyRule>>,
}

impl PropertyRuler {
    pub fn new(config: &BusinessRules) -> Self {
        Self::with_rules(vec![
            Box::new(LocationRule::new()),
            Box::new(PropertyTypeRule::new(config)),
            Box::new(PriceRule::new(&config.bundle_box)),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn PropertyRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Classifies the listing in place. Never fails; a violation yields INVALID.
    pub fn execute(&self, property: &mut Property) {
        for rule in &self.rules {
            if let Err(violation) = rule.validate(property) {
                debug!(
                    rule = rule.name(),
                    property_id = property.id.0,
                    %violation,
                    "listing failed catalog rule"
                );
                property.status = PropertyStatus::Invalid;
                break;
            }
        }
    }
}

impl PropertyClassifier for PropertyRuler {
    fn execute(&self, property: &mut Property) {
        PropertyRuler::execute(self, property);
    }
}
