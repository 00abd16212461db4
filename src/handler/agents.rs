use std::sync::Arc;

use axum::{
    extract::Path, response::IntoResponse, routing::get, Extension, Json, Router,
};
use serde_json::json;

use crate::{
    db::agentdb::AgentExt,
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn agents_handler() -> Router {
    Router::new()
        .route("/", get(get_agents))
        .route("/:agent_id", get(get_agent_by_id))
}

pub async fn get_agents(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let agents = app_state.db_client.get_agents().await.map_err(|e| {
        tracing::error!("agent listing failed: {}", e);
        HttpError::server_error(ErrorMessage::ServerError.to_string())
    })?;

    Ok(Json(json!({
        "status": "success",
        "results": agents.len(),
        "agents": agents,
    })))
}

pub async fn get_agent_by_id(
    Path(agent_id): Path<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let agent = app_state
        .db_client
        .get_agent_by_id(agent_id)
        .await
        .map_err(|e| {
            tracing::error!("agent lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?
        .ok_or_else(|| HttpError::not_found("Agent not found"))?;

    Ok(Json(json!({
        "status": "success",
        "agent": agent,
    })))
}
