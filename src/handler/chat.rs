use std::sync::Arc;

use axum::{
    http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router,
};
use validator::Validate;

use crate::{
    dtos::chatdtos::{ChatRequestDto, ChatResponseDto},
    error::HttpError,
    AppState,
};

const FALLBACK_MESSAGE: &str =
    "I'm having trouble connecting right now. Please try again later or reach out to one of our agents directly.";

pub fn chat_handler() -> Router {
    Router::new().route("/chat", post(chat))
}

/// Relays the conversation to the generative-language upstream. Upstream
/// failures degrade to a fallback message with `success: false` rather than
/// an opaque error.
pub async fn chat(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    match app_state.gemini.generate_reply(&body.messages).await {
        Ok(message) => Ok((
            StatusCode::OK,
            Json(ChatResponseDto {
                message,
                success: true,
            }),
        )),
        Err(e) => {
            tracing::error!("AI chat upstream failure: {}", e);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponseDto {
                    message: FALLBACK_MESSAGE.to_string(),
                    success: false,
                }),
            ))
        }
    }
}
