use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::propertydb::PropertyExt,
    dtos::propertydtos::{
        LimitQueryDto, PropertyFilterQueryDto, PropertyListResponseDto, PropertyResponseDto,
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

const DEFAULT_LIMIT: i64 = 10;

pub fn properties_handler() -> Router {
    Router::new()
        .route("/", get(get_properties))
        .route("/featured", get(get_featured_properties))
        .route("/city/:city", get(get_properties_by_city))
        .route("/:property_id", get(get_property_by_id))
}

pub async fn get_properties(
    Query(filters): Query<PropertyFilterQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    filters
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let properties = app_state
        .db_client
        .get_properties(&filters)
        .await
        .map_err(|e| {
            tracing::error!("property search failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    Ok(Json(PropertyListResponseDto {
        status: "success".to_string(),
        results: properties.len(),
        properties,
    }))
}

pub async fn get_featured_properties(
    Query(query): Query<LimitQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let properties = app_state
        .db_client
        .get_featured_properties(limit)
        .await
        .map_err(|e| {
            tracing::error!("featured property lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    Ok(Json(PropertyListResponseDto {
        status: "success".to_string(),
        results: properties.len(),
        properties,
    }))
}

pub async fn get_properties_by_city(
    Path(city): Path<String>,
    Query(query): Query<LimitQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let properties = app_state
        .db_client
        .get_properties_by_city(&city, limit)
        .await
        .map_err(|e| {
            tracing::error!("city property lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    Ok(Json(PropertyListResponseDto {
        status: "success".to_string(),
        results: properties.len(),
        properties,
    }))
}

pub async fn get_property_by_id(
    Path(property_id): Path<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .get_property_by_id(property_id)
        .await
        .map_err(|e| {
            tracing::error!("property lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?
        .ok_or_else(|| HttpError::not_found("Property not found"))?;

    Ok(Json(PropertyResponseDto {
        status: "success".to_string(),
        property,
    }))
}
