use std::sync::Arc;

use axum::{
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use validator::Validate;

use crate::{
    db::{sessiondb::SessionExt, userdb::UserExt},
    dtos::userdtos::{AuthStatusResponseDto, FilterUserDto, LoginUserDto, Response, UserResponseDto},
    error::{ErrorMessage, HttpError},
    middleware::{auth, resolve_session_user, SessionAuth, SESSION_COOKIE},
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me).layer(axum::middleware::from_fn(auth)))
        .route("/status", get(status))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<LoginUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let result = app_state
        .db_client
        .get_user_by_username(&body.username)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let user = result
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::IncorrectUsername.to_string()))?;

    let stored_hash = user
        .password
        .as_deref()
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::IncorrectPassword.to_string()))?;

    let password_matched = crate::utils::password::compare(&body.password, stored_hash)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::IncorrectPassword.to_string()))?;

    if !password_matched {
        return Err(HttpError::unauthorized(
            ErrorMessage::IncorrectPassword.to_string(),
        ));
    }

    let session = app_state
        .db_client
        .create_session(user.id, app_state.env.session_maxage)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let cookie_duration = time::Duration::minutes(app_state.env.session_maxage);
    let cookie = Cookie::build((SESSION_COOKIE, session.sid.clone()))
        .path("/")
        .max_age(cookie_duration)
        .http_only(true)
        .build();

    let response = Json(UserResponseDto {
        status: "success".to_string(),
        user: FilterUserDto::filter_user(&user),
    });

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie
            .to_string()
            .parse()
            .map_err(|_| HttpError::server_error(ErrorMessage::ServerError.to_string()))?,
    );

    let mut response = response.into_response();
    response.headers_mut().extend(headers);

    Ok(response)
}

pub async fn logout(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    if let Some(cookie) = cookie_jar.get(SESSION_COOKIE) {
        app_state
            .db_client
            .delete_session(cookie.value())
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?;
    }

    // Expire the cookie on the client as well
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .http_only(true)
        .build();

    let response = Json(Response {
        status: "success",
        message: "Logged out".to_string(),
    });

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie
            .to_string()
            .parse()
            .map_err(|_| HttpError::server_error(ErrorMessage::ServerError.to_string()))?,
    );

    let mut response = response.into_response();
    response.headers_mut().extend(headers);

    Ok(response)
}

pub async fn me(
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(Json(UserResponseDto {
        status: "success".to_string(),
        user: FilterUserDto::filter_user(&session.user),
    }))
}

/// Never fails with 401; reports the authentication state instead.
pub async fn status(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let user = resolve_session_user(&cookie_jar, &app_state).await?;

    Ok(Json(AuthStatusResponseDto {
        is_authenticated: user.is_some(),
        user: user.as_ref().map(FilterUserDto::filter_user),
    }))
}
