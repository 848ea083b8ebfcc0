use std::collections::HashMap;

use super::domain::{Location, PropertyStatus};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;
const MIN_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 20;

/// Status restriction applied to a catalog search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PropertyStatus),
}

impl StatusFilter {
    fn parse(raw: &str) -> Result<Self, SearchParamsError> {
        match raw {
            "ALL" => Ok(Self::All),
            "ACTIVE" => Ok(Self::Only(PropertyStatus::Active)),
            "INACTIVE" => Ok(Self::Only(PropertyStatus::Inactive)),
            "INVALID" => Ok(Self::Only(PropertyStatus::Invalid)),
            other => Err(SearchParamsError::InvalidStatus(other.to_string())),
        }
    }

    pub fn matches(&self, status: PropertyStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Inclusive longitude/latitude rectangle used to narrow a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

impl BoundingBox {
    /// Parses `minLon,minLat,maxLon,maxLat`; whitespace is ignored.
    fn parse(raw: &str) -> Result<Self, SearchParamsError> {
        let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let values = normalized
            .split(',')
            .map(|value| {
                value
                    .parse::<f64>()
                    .map_err(|_| SearchParamsError::InvalidBbox(raw.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let &[min_longitude, min_latitude, max_longitude, max_latitude] = values.as_slice() else {
            return Err(SearchParamsError::InvalidBbox(raw.to_string()));
        };

        let valid_longitude = min_longitude >= -180.0 && max_longitude <= 180.0;
        let valid_latitude = min_latitude >= -90.0 && max_latitude <= 90.0;
        if !valid_longitude || !valid_latitude {
            return Err(SearchParamsError::BboxOutOfBounds);
        }

        Ok(Self {
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
        })
    }

    pub fn contains(&self, location: &Location) -> bool {
        location.longitude >= self.min_longitude
            && location.longitude <= self.max_longitude
            && location.latitude >= self.min_latitude
            && location.latitude <= self.max_latitude
    }
}

/// Validated catalog search request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySearchParams {
    pub status: StatusFilter,
    pub bbox: Option<BoundingBox>,
    pub page: i64,
    pub page_size: i64,
}

impl Default for PropertySearchParams {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            bbox: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PropertySearchParams {
    /// Builds search parameters from raw query pairs; empty values count as absent.
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, SearchParamsError> {
        let lookup = |key: &str| {
            query
                .get(key)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        };

        let mut params = Self::default();

        if let Some(status) = lookup("status") {
            params.status = StatusFilter::parse(status)?;
        }

        if let Some(bbox) = lookup("bbox") {
            params.bbox = Some(BoundingBox::parse(bbox)?);
        }

        if let Some(page) = lookup("page") {
            let page = parse_number("page", page)?;
            if page < 1 {
                return Err(SearchParamsError::PageOutOfRange(page));
            }
            params.page = page;
        }

        if let Some(page_size) = lookup("pageSize") {
            let page_size = parse_number("pageSize", page_size)?;
            if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
                return Err(SearchParamsError::PageSizeOutOfRange(page_size));
            }
            params.page_size = page_size;
        }

        Ok(params)
    }

    /// Number of matching records to skip before this page starts.
    pub fn offset(&self) -> usize {
        usize::try_from(self.page_size.saturating_mul(self.page.saturating_sub(1))).unwrap_or(0)
    }

    pub fn limit(&self) -> usize {
        usize::try_from(self.page_size).unwrap_or(0)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<i64, SearchParamsError> {
    raw.parse::<i64>()
        .map_err(|_| SearchParamsError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

/// Rejections raised while reading search query parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchParamsError {
    #[error("invalid status [{0}]")]
    InvalidStatus(String),
    #[error("invalid bbox format [{0}]")]
    InvalidBbox(String),
    #[error("location is not valid")]
    BboxOutOfBounds,
    #[error("{field} must be an integer (found '{value}')")]
    InvalidNumber { field: &'static str, value: String },
    #[error("page must be at least 1 (found {0})")]
    PageOutOfRange(i64),
    #[error("page size should be between 10 and 20 (found {0})")]
    PageSizeOutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_query_is_empty() {
        let params = PropertySearchParams::from_query(&HashMap::new()).expect("defaults");
        assert_eq!(params, PropertySearchParams::default());
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn parses_full_query() {
        let params = PropertySearchParams::from_query(&query(&[
            ("status", "ACTIVE"),
            ("bbox", "-99.3, 19.2, -98.9, 19.7"),
            ("page", "3"),
            ("pageSize", "15"),
        ]))
        .expect("parses");

        assert_eq!(params.status, StatusFilter::Only(PropertyStatus::Active));
        let bbox = params.bbox.expect("bbox present");
        assert_eq!(bbox.min_longitude, -99.3);
        assert_eq!(bbox.max_latitude, 19.7);
        assert_eq!(params.offset(), 30);
        assert_eq!(params.limit(), 15);
    }

    #[test]
    fn rejects_unknown_status() {
        assert_eq!(
            PropertySearchParams::from_query(&query(&[("status", "UNSET")])),
            Err(SearchParamsError::InvalidStatus("UNSET".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_bbox() {
        assert!(matches!(
            PropertySearchParams::from_query(&query(&[("bbox", "1,2,3")])),
            Err(SearchParamsError::InvalidBbox(_))
        ));
        assert!(matches!(
            PropertySearchParams::from_query(&query(&[("bbox", "a,2,3,4")])),
            Err(SearchParamsError::InvalidBbox(_))
        ));
        assert_eq!(
            PropertySearchParams::from_query(&query(&[("bbox", "-181,0,10,10")])),
            Err(SearchParamsError::BboxOutOfBounds)
        );
    }

    #[test]
    fn page_size_must_stay_within_bounds() {
        assert_eq!(
            PropertySearchParams::from_query(&query(&[("pageSize", "9")])),
            Err(SearchParamsError::PageSizeOutOfRange(9))
        );
        assert_eq!(
            PropertySearchParams::from_query(&query(&[("pageSize", "21")])),
            Err(SearchParamsError::PageSizeOutOfRange(21))
        );
        assert!(PropertySearchParams::from_query(&query(&[("pageSize", "20")])).is_ok());
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_pages() {
        assert_eq!(
            PropertySearchParams::from_query(&query(&[("page", "0")])),
            Err(SearchParamsError::PageOutOfRange(0))
        );
        assert!(matches!(
            PropertySearchParams::from_query(&query(&[("page", "two")])),
            Err(SearchParamsError::InvalidNumber { field: "page", .. })
        ));
    }

    #[test]
    fn bounding_box_edges_are_inclusive() {
        let bbox = BoundingBox {
            min_longitude: -10.0,
            min_latitude: -5.0,
            max_longitude: 10.0,
            max_latitude: 5.0,
        };
        assert!(bbox.contains(&Location {
            longitude: 10.0,
            latitude: -5.0
        }));
        assert!(!bbox.contains(&Location {
            longitude: 10.5,
            latitude: 0.0
        }));
    }

    #[test]
    fn offset_saturates_for_hand_built_params() {
        let params = PropertySearchParams {
            page: i64::MIN,
            ..PropertySearchParams::default()
        };
        assert_eq!(params.offset(), 0);

        let params = PropertySearchParams {
            page: i64::MAX,
            ..PropertySearchParams::default()
        };
        assert_eq!(params.offset(), usize::try_from(i64::MAX).unwrap());
    }
}
