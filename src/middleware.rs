use std::sync::Arc;

use axum::{extract::Request, middleware::Next, response::IntoResponse, Extension};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    db::{sessiondb::SessionExt, userdb::UserExt},
    error::{ErrorMessage, HttpError},
    models::usermodel::User,
    AppState,
};

pub const SESSION_COOKIE: &str = "sid";

/// Authenticated identity for the current request. The password hash is
/// cleared before the record is attached.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionAuth {
    pub user: User,
}

/// Resolves the session cookie to its user, or None when there is no cookie,
/// the session is expired, or the user no longer exists.
pub async fn resolve_session_user(
    cookie_jar: &CookieJar,
    app_state: &Arc<AppState>,
) -> Result<Option<User>, HttpError> {
    let sid = match cookie_jar.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Ok(None),
    };

    let session = app_state
        .db_client
        .get_valid_session(&sid)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let session = match session {
        Some(session) => session,
        None => return Ok(None),
    };

    // Only the user id lives in the session; the record is re-fetched on
    // every request so stale identities fail closed.
    let user = app_state
        .db_client
        .get_user_by_id(session.user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(user.map(|mut user| {
        user.password = None;
        user
    }))
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let user = resolve_session_user(&cookie_jar, &app_state)
        .await?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::UserNotAuthenticated.to_string()))?;

    req.extensions_mut().insert(SessionAuth { user });

    Ok(next.run(req).await)
}
