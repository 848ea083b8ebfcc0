use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PropertyRule, RuleViolation};
use crate::catalog::domain::{Location, Property, PropertyStatus};
use crate::config::BundleBox;

/// Which price band applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceZone {
    InsideBundle,
    OutsideBundle,
}

impl fmt::Display for PriceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceZone::InsideBundle => write!(f, "inside-bundle"),
            PriceZone::OutsideBundle => write!(f, "outside-bundle"),
        }
    }
}

/// Assigns the provisional catalog status from the bundle box and checks the sale price band.
///
/// The status is written before the price check and left in place when the check
/// fails; the chain is responsible for replacing it with INVALID.
#[derive(Debug, Clone, Copy)]
pub struct PriceRule {
    bundle: BundleBox,
}

impl PriceRule {
    pub fn new(bundle: &BundleBox) -> Self {
        Self { bundle: *bundle }
    }

    pub fn zone_for(&self, location: &Location) -> PriceZone {
        if self.bundle.longitude.contains(location.longitude)
            && self.bundle.latitude.contains(location.latitude)
        {
            PriceZone::InsideBundle
        } else {
            PriceZone::OutsideBundle
        }
    }
}

impl PropertyRule for PriceRule {
    fn name(&self) -> &'static str {
        "price"
    }

    fn validate(&self, property: &mut Property) -> Result<(), RuleViolation> {
        let zone = self.zone_for(&property.location);
        let allowed = match zone {
            PriceZone::InsideBundle => {
                property.status = PropertyStatus::Active;
                self.bundle.price_in
            }
            PriceZone::OutsideBundle => {
                property.status = PropertyStatus::Inactive;
                self.bundle.price_out
            }
        };

        let sale_price = property.pricing.sale_price;
        if allowed.contains(sale_price) {
            Ok(())
        } else {
            Err(RuleViolation::PriceOutOfRange {
                found: sale_price,
                allowed,
                zone,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::common::priced_listing_at;
    use crate::config::BusinessRules;

    const MILLION: i64 = 1_000_000;

    fn rule() -> PriceRule {
        PriceRule::new(&BusinessRules::reference().bundle_box)
    }

    #[test]
    fn inside_bundle_with_valid_price_is_active() {
        let mut property = priced_listing_at(-99.1, 19.3, 2 * MILLION);
        assert!(rule().validate(&mut property).is_ok());
        assert_eq!(property.status, PropertyStatus::Active);
    }

    #[test]
    fn inside_bundle_price_failure_keeps_provisional_status() {
        let mut property = priced_listing_at(-99.1, 19.3, 20 * MILLION);
        match rule().validate(&mut property) {
            Err(RuleViolation::PriceOutOfRange { zone, found, .. }) => {
                assert_eq!(zone, PriceZone::InsideBundle);
                assert_eq!(found, 20 * MILLION);
            }
            other => panic!("expected price violation, got {other:?}"),
        }
        assert_eq!(property.status, PropertyStatus::Active);
    }

    #[test]
    fn outside_bundle_with_valid_price_is_inactive() {
        let mut property = priced_listing_at(-99.5, 19.3, 200 * MILLION);
        assert!(rule().validate(&mut property).is_ok());
        assert_eq!(property.status, PropertyStatus::Inactive);
    }

    #[test]
    fn outside_bundle_price_failure_keeps_provisional_status() {
        let mut property = priced_listing_at(-99.5, 19.3, 2 * MILLION);
        assert!(matches!(
            rule().validate(&mut property),
            Err(RuleViolation::PriceOutOfRange {
                zone: PriceZone::OutsideBundle,
                ..
            })
        ));
        assert_eq!(property.status, PropertyStatus::Inactive);
    }

    #[test]
    fn bundle_edges_count_as_inside() {
        let bundle = BusinessRules::reference().bundle_box;
        let corner = Location {
            longitude: bundle.longitude.lower,
            latitude: bundle.latitude.upper,
        };
        assert_eq!(rule().zone_for(&corner), PriceZone::InsideBundle);

        let mut property = priced_listing_at(-99.1, 19.3, bundle.price_in.upper);
        assert!(rule().validate(&mut property).is_ok());
    }

    #[test]
    fn matching_one_axis_is_not_enough() {
        let outside_latitude = Location {
            longitude: -99.1,
            latitude: 25.0,
        };
        assert_eq!(rule().zone_for(&outside_latitude), PriceZone::OutsideBundle);
    }
}
