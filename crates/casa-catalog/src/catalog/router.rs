use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{Property, PropertyId};
use super::repository::{PropertyRepository, RepositoryError};
use super::request::PropertyRequest;
use super::ruler::PropertyClassifier;
use super::search::PropertySearchParams;
use super::service::{CatalogServiceError, PropertyCatalogService};

/// Error payload shared by every catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i64,
    pub description: String,
    pub details: String,
}

impl ErrorBody {
    pub fn domain(details: impl Into<String>) -> Self {
        Self {
            code: 1,
            description: "Domain error".to_string(),
            details: details.into(),
        }
    }

    pub fn not_found(details: impl Into<String>) -> Self {
        Self {
            code: 10,
            description: "Entity not found".to_string(),
            details: details.into(),
        }
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self {
            code: 20,
            description: "Server error".to_string(),
            details: details.into(),
        }
    }
}

/// Router builder exposing the listing catalog endpoints.
pub fn property_router<R, C>(service: Arc<PropertyCatalogService<R, C>>) -> Router
where
    R: PropertyRepository + 'static,
    C: PropertyClassifier + 'static,
{
    Router::new()
        .route(
            "/v1/properties",
            post(create_handler::<R, C>).get(search_handler::<R, C>),
        )
        .route("/v1/properties/:id", put(update_handler::<R, C>))
        .with_state(service)
}

pub(crate) async fn create_handler<R, C>(
    State(service): State<Arc<PropertyCatalogService<R, C>>>,
    payload: Result<Json<PropertyRequest>, JsonRejection>,
) -> Response
where
    R: PropertyRepository + 'static,
    C: PropertyClassifier + 'static,
{
    let property = match decode_property(payload) {
        Ok(property) => property,
        Err(response) => return response,
    };

    match service.create(property) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(err) => service_error_response("create", err),
    }
}

pub(crate) async fn update_handler<R, C>(
    State(service): State<Arc<PropertyCatalogService<R, C>>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<PropertyRequest>, JsonRejection>,
) -> Response
where
    R: PropertyRepository + 'static,
    C: PropertyClassifier + 'static,
{
    let Ok(id) = raw_id.parse::<i64>() else {
        warn!(id = %raw_id, "rejected listing update with non-numeric id");
        return error_response(
            StatusCode::BAD_REQUEST,
            ErrorBody::domain(format!("invalid property id [{raw_id}]")),
        );
    };

    let property = match decode_property(payload) {
        Ok(property) => property,
        Err(response) => return response,
    };

    match service.update(PropertyId(id), property) {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(err) => service_error_response("update", err),
    }
}

pub(crate) async fn search_handler<R, C>(
    State(service): State<Arc<PropertyCatalogService<R, C>>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response
where
    R: PropertyRepository + 'static,
    C: PropertyClassifier + 'static,
{
    let params = match PropertySearchParams::from_query(&query) {
        Ok(params) => params,
        Err(err) => {
            warn!(error = %err, "rejected listing search");
            return error_response(StatusCode::BAD_REQUEST, ErrorBody::domain(err.to_string()));
        }
    };

    match service.search(&params) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => service_error_response("search", err),
    }
}

fn decode_property(
    payload: Result<Json<PropertyRequest>, JsonRejection>,
) -> Result<Property, Response> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "json decode error");
        error_response(
            StatusCode::BAD_REQUEST,
            ErrorBody::domain(rejection.body_text()),
        )
    })?;

    request.into_property().map_err(|err| {
        warn!(error = %err, "error mapping to property");
        error_response(StatusCode::BAD_REQUEST, ErrorBody::domain(err.to_string()))
    })
}

fn service_error_response(operation: &'static str, err: CatalogServiceError) -> Response {
    warn!(operation, error = %err, "catalog operation failed");
    match &err {
        CatalogServiceError::Repository(RepositoryError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, ErrorBody::not_found(err.to_string()))
        }
        _ => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::internal(err.to_string()),
        ),
    }
}

fn error_response(status: StatusCode, body: ErrorBody) -> Response {
    (status, Json(body)).into_response()
}
