use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::enquirydb::EnquiryExt,
    dtos::enquirydtos::{CreateEnquiryDto, EnquiryListResponseDto, EnquiryResponseDto},
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn enquiries_handler() -> Router {
    Router::new().route("/", post(create_enquiry).get(get_enquiries))
}

pub async fn create_enquiry(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateEnquiryDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let enquiry = app_state
        .db_client
        .create_enquiry(body)
        .await
        .map_err(|e| {
            tracing::error!("failed to create enquiry: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(EnquiryResponseDto {
            status: "success".to_string(),
            enquiry,
        }),
    ))
}

pub async fn get_enquiries(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let enquiries = app_state.db_client.get_enquiries().await.map_err(|e| {
        tracing::error!("enquiry listing failed: {}", e);
        HttpError::server_error(ErrorMessage::ServerError.to_string())
    })?;

    Ok(Json(EnquiryListResponseDto {
        status: "success".to_string(),
        results: enquiries.len(),
        enquiries,
    }))
}
