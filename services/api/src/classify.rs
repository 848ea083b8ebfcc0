use casa_catalog::catalog::{Property, PropertyRequest, PropertyRuler};
use casa_catalog::config::{AppConfig, BusinessRules, RulesConfig};
use casa_catalog::error::AppError;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// JSON file holding a listing in the create/update payload shape
    #[arg(long)]
    pub(crate) listing: PathBuf,
    /// Business rules YAML file (defaults to APP_BUSINESS_RULES, then the built-in rules)
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let rules_config = match args.rules {
        Some(path) => RulesConfig { path: Some(path) },
        None => AppConfig::load()?.rules,
    };
    let rules = rules_config.load()?;

    let raw = fs::read_to_string(&args.listing)?;
    let property = classify_listing(&raw, &rules)?;

    println!("Listing: {}", property.title);
    println!(
        "Type: {} | Location: ({}, {}) | Sale price: {}",
        property.property_type.label(),
        property.location.longitude,
        property.location.latitude,
        property.pricing.sale_price
    );
    println!("Status: {}", property.status.label());
    Ok(())
}

pub(crate) fn classify_listing(raw: &str, rules: &BusinessRules) -> Result<Property, AppError> {
    let request: PropertyRequest = serde_json::from_str(raw)?;
    let mut property = request.into_property()?;
    PropertyRuler::new(rules).execute(&mut property);
    Ok(property)
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_catalog::catalog::{PropertyStatus, RequestError};

    const LISTING: &str = r#"{
        "title": "Casa en Tlalpan",
        "location": { "longitude": -99.5, "latitude": 19.3 },
        "pricing": { "salePrice": 200000000 },
        "propertyType": "HOUSE",
        "bedrooms": 4,
        "bathrooms": 3,
        "area": 650
    }"#;

    #[test]
    fn classifies_listing_files() {
        let property =
            classify_listing(LISTING, &BusinessRules::reference()).expect("listing classifies");
        assert_eq!(property.status, PropertyStatus::Inactive);
    }

    #[test]
    fn reports_missing_fields() {
        let raw = LISTING.replace("\"area\": 650", "\"photos\": []");
        match classify_listing(&raw, &BusinessRules::reference()) {
            Err(AppError::Listing(RequestError::MissingField(field))) => assert_eq!(field, "area"),
            other => panic!("expected missing field error, got {other:?}"),
        }
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(
            classify_listing("{", &BusinessRules::reference()),
            Err(AppError::Decode(_))
        ));
    }
}
