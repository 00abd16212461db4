use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{propertydb::PropertyExt, savedpropertydb::SavedPropertyExt},
    dtos::{
        savedpropertydtos::{
            SavePropertyDto, SavedCheckResponseDto, SavedPropertyListResponseDto,
            SavedPropertyResponseDto,
        },
        userdtos::Response,
    },
    error::{ErrorMessage, HttpError},
    middleware::SessionAuth,
    AppState,
};

pub fn saved_properties_handler() -> Router {
    Router::new()
        .route("/", get(get_saved_properties).post(save_property))
        .route("/:property_id", delete(remove_saved_property))
        .route("/:property_id/check", get(check_saved_property))
}

pub async fn get_saved_properties(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let properties = app_state
        .db_client
        .get_saved_properties(session.user.id)
        .await
        .map_err(|e| {
            tracing::error!("saved property listing failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    Ok(Json(SavedPropertyListResponseDto {
        status: "success".to_string(),
        results: properties.len(),
        properties,
    }))
}

pub async fn save_property(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Json(body): Json<SavePropertyDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // Saving a listing that does not exist is a 404, not a foreign key error
    app_state
        .db_client
        .get_property_by_id(body.property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Property not found"))?;

    let saved = app_state
        .db_client
        .save_property(session.user.id, body.property_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to save property: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(SavedPropertyResponseDto {
            status: "success".to_string(),
            saved,
        }),
    ))
}

pub async fn remove_saved_property(
    Path(property_id): Path<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let removed = app_state
        .db_client
        .remove_saved_property(session.user.id, property_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to remove saved property: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    if !removed {
        return Err(HttpError::not_found("Saved property not found"));
    }

    Ok(Json(Response {
        status: "success",
        message: "Property removed from saved list".to_string(),
    }))
}

pub async fn check_saved_property(
    Path(property_id): Path<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let is_saved = app_state
        .db_client
        .is_property_saved(session.user.id, property_id)
        .await
        .map_err(|e| {
            tracing::error!("saved property check failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    Ok(Json(SavedCheckResponseDto {
        status: "success".to_string(),
        is_saved,
    }))
}
