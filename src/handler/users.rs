use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::userdb::UserExt,
    dtos::userdtos::{FilterUserDto, RegisterUserDto, UpdateUserDto, UserResponseDto},
    error::{ErrorMessage, HttpError},
    middleware::{auth, SessionAuth},
    AppState,
};

pub fn users_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route(
            "/:user_id",
            patch(update_profile).layer(axum::middleware::from_fn(auth)),
        )
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state
        .db_client
        .get_user_by_username(&body.username)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::unique_constraint_violation(
            ErrorMessage::UsernameExist.to_string(),
        ));
    }

    let user = app_state
        .db_client
        .save_user(body)
        .await
        .map_err(registration_error)?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponseDto {
            status: "success".to_string(),
            user: FilterUserDto::filter_user(&user),
        }),
    ))
}

// The unique index catches the register/register race the existence
// check cannot
fn registration_error(e: anyhow::Error) -> HttpError {
    if let Some(sqlx::Error::Database(db_err)) = e.downcast_ref::<sqlx::Error>() {
        if db_err.is_unique_violation() {
            return HttpError::unique_constraint_violation(ErrorMessage::UsernameExist.to_string());
        }
    }
    tracing::error!("failed to create user: {}", e);
    HttpError::server_error(ErrorMessage::ServerError.to_string())
}

pub async fn update_profile(
    Path(user_id): Path<i32>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Json(body): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // Users may only edit their own profile; no role-based override
    if session.user.id != user_id {
        return Err(HttpError::forbidden(
            ErrorMessage::PermissionDenied.to_string(),
        ));
    }

    let updated = app_state
        .db_client
        .update_user(user_id, body)
        .await
        .map_err(|e| {
            tracing::error!("failed to update user {}: {}", user_id, e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?;

    let user = updated.ok_or_else(|| HttpError::not_found("User not found"))?;

    Ok(Json(UserResponseDto {
        status: "success".to_string(),
        user: FilterUserDto::filter_user(&user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        db::db::DBClient,
        models::usermodel::{User, UserRole},
        service::gemini::GeminiService,
    };
    use sqlx::postgres::PgPoolOptions;

    // connect_lazy never touches the network; the self-match check runs
    // before any query is issued.
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

    fn session_for(user_id: i32) -> SessionAuth {
        SessionAuth {
            user: User {
                id: user_id,
                username: "alice".to_string(),
                password: None,
                email: None,
                name: None,
                phone: None,
                profile_image: None,
                role: UserRole::User,
                created_at: chrono::Utc::now(),
            },
        }
    }

    #[tokio::test]
    async fn updating_another_users_profile_is_forbidden() {
        let result = update_profile(
            Path(2),
            Extension(test_state()),
            Extension(session_for(1)),
            Json(UpdateUserDto::default()),
        )
        .await;

        let err = match result {
            Err(e) => e,
            Ok(_) => panic!("expected a forbidden error"),
        };
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.message, ErrorMessage::PermissionDenied.to_string());
    }

    #[derive(Debug)]
    struct DuplicateKeyError;

    impl std::fmt::Display for DuplicateKeyError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "duplicate key value violates unique constraint")
        }
    }

    impl std::error::Error for DuplicateKeyError {}

    impl sqlx::error::DatabaseError for DuplicateKeyError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn unique_violation_during_register_maps_to_conflict() {
        let e = anyhow::Error::from(sqlx::Error::Database(Box::new(DuplicateKeyError)));
        let http_err = registration_error(e);
        assert_eq!(http_err.status, StatusCode::CONFLICT);
        assert_eq!(http_err.message, ErrorMessage::UsernameExist.to_string());
    }

    #[test]
    fn other_registration_failures_map_to_server_error() {
        let e = anyhow::anyhow!("connection reset by peer");
        assert_eq!(
            registration_error(e).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
