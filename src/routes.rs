use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        agents::agents_handler, auth::auth_handler, chat::chat_handler,
        enquiries::enquiries_handler, properties::properties_handler,
        saved_properties::saved_properties_handler, users::users_handler,
    },
    middleware::auth,
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/properties", properties_handler())
        .nest("/agents", agents_handler())
        .nest("/enquiries", enquiries_handler())
        .nest("/users", users_handler())
        .nest("/auth", auth_handler())
        .nest(
            "/saved-properties",
            saved_properties_handler().layer(middleware::from_fn(auth)),
        )
        .nest("/ai", chat_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db::db::DBClient, service::gemini::GeminiService};
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // connect_lazy never touches the network; only routes that skip the
    // database can be exercised here.
    fn test_state() -> Arc<AppState> {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/propnest_test")
            .unwrap();

        Arc::new(AppState {
            env: Config {
                database_url: "postgres://localhost/propnest_test".to_string(),
                port: 8000,
                session_maxage: 60,
                gemini_api_key: "".to_string(),
                seed_on_startup: false,
            },
            db_client: Arc::new(DBClient::new(pool)),
            gemini: Arc::new(GeminiService::new("".to_string())),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn auth_status_without_cookie_reports_unauthenticated() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::get("/api/auth/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["isAuthenticated"], false);
        assert!(json.get("user").is_none());
    }

    #[tokio::test]
    async fn auth_me_without_cookie_is_unauthorized() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn saved_properties_require_authentication() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::get("/api/saved-properties")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_enquiry_body_fails_validation() {
        let app = create_router(test_state());

        let body = json!({
            "name": "",
            "email": "not-an-email",
            "phone": "123",
            "message": ""
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/enquiries")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_with_short_password_fails_validation() {
        let app = create_router(test_state());

        let body = json!({ "username": "alice", "password": "short" });

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/users/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn property_filter_with_unknown_type_is_rejected() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::get("/api/properties?type=castle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ai_chat_without_upstream_returns_fallback() {
        let app = create_router(test_state());

        let body = json!({
            "messages": [{ "role": "user", "content": "Find me a flat" }]
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/ai/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        // No API key configured: graceful failure payload, not a bare 500
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().len() > 0);
    }
}
