// Account and session HTTP routes
//
// Registration leaves the caller logged in: a session is started as soon as
// the account exists. Login failures answer 401 without distinguishing
// unknown users from wrong passwords.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use homestat_contracts::{
    LoginRequest, LogoutRequest, RegisterRequest, SessionQuery, SessionResponse, StatusResponse,
};
use homestat_core::{CredentialStore, SessionManager, SessionRecord};

use crate::common::error_status;

/// App state for auth routes
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialStore,
    pub sessions: SessionManager,
}

/// Create auth routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/auth/register", post(register))
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/logout", post(logout))
        .route("/v1/auth/status", get(status))
        .with_state(state)
}

fn session_response(session: SessionRecord) -> SessionResponse {
    SessionResponse {
        session_token: session.token,
        session_expiry: session.expires_at,
    }
}

/// POST /v1/auth/register - Create an account and start a session
#[utoipa::path(
    post,
    path = "/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created, session started", body = SessionResponse),
        (status = 400, description = "Invalid registration input"),
        (status = 409, description = "User already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), StatusCode> {
    if req.password1 != req.password2 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let user_id = state
        .credentials
        .register(&req.username, &req.realname, &req.password1)
        .await
        .map_err(|e| error_status("register", e))?;

    let session = state
        .sessions
        .create_session(user_id)
        .await
        .map_err(|e| error_status("register", e))?;

    Ok((StatusCode::CREATED, Json(session_response(session))))
}

/// POST /v1/auth/login - Verify a password and start a session
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session started", body = SessionResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, StatusCode> {
    let ok = state
        .credentials
        .authenticate(&req.username, &req.password)
        .await
        .map_err(|e| error_status("login", e))?;
    if !ok {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user_id = state
        .credentials
        .user_id(&req.username)
        .await
        .map_err(|e| error_status("login", e))?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let session = state
        .sessions
        .create_session(user_id)
        .await
        .map_err(|e| error_status("login", e))?;

    Ok(Json(session_response(session)))
}

/// POST /v1/auth/logout - End a session
#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    request_body = LogoutRequest,
    responses(
        (status = 204, description = "Session revoked (idempotent)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> Result<StatusCode, StatusCode> {
    state
        .sessions
        .revoke(&req.session_token)
        .await
        .map_err(|e| error_status("logout", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/auth/status - Identify the session holder
#[utoipa::path(
    get,
    path = "/v1/auth/status",
    params(
        ("session_token" = String, Query, description = "Session token")
    ),
    responses(
        (status = 200, description = "Session is live", body = StatusResponse),
        (status = 401, description = "Unknown or expired session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn status(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let user_id = state
        .sessions
        .validate(&query.session_token)
        .await
        .map_err(|e| error_status("status", e))?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = state
        .credentials
        .find_user(user_id)
        .await
        .map_err(|e| error_status("status", e))?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(StatusResponse {
        username: user.email,
        realname: user.display_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use homestat_core::{memory::InMemoryAuthStore, AuthConfig};
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(InMemoryAuthStore::new());
        let config = AuthConfig::default();
        let state = AppState {
            credentials: CredentialStore::new(store.clone(), config.clone()),
            sessions: SessionManager::new(store, config.session_ttl()),
        };
        routes(state)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_login_status_logout_flow() {
        let app = app();

        // Register: 201 and a usable session
        let response = app
            .clone()
            .oneshot(post_json(
                "/v1/auth/register",
                json!({
                    "username": "a@example.com",
                    "realname": "Alice",
                    "password1": "secret12",
                    "password2": "secret12",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let registered = body_json(response).await;
        let token = registered["session_token"].as_str().unwrap().to_string();

        // The registration session is live
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/v1/auth/status?session_token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let status_body = body_json(response).await;
        assert_eq!(status_body["username"], "a@example.com");
        assert_eq!(status_body["realname"], "Alice");

        // Login issues a fresh session
        let response = app
            .clone()
            .oneshot(post_json(
                "/v1/auth/login",
                json!({ "username": "a@example.com", "password": "secret12" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let login_body = body_json(response).await;
        let login_token = login_body["session_token"].as_str().unwrap().to_string();
        assert_ne!(login_token, token);

        // Logout, then the session no longer validates
        let response = app
            .clone()
            .oneshot(post_json(
                "/v1/auth/logout",
                json!({ "session_token": login_token }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/v1/auth/status?session_token={login_token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_register_rejects_mismatched_passwords() {
        let app = app();
        let response = app
            .oneshot(post_json(
                "/v1/auth/register",
                json!({
                    "username": "a@example.com",
                    "realname": "Alice",
                    "password1": "secret12",
                    "password2": "different",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_duplicate_answers_conflict() {
        let app = app();
        let req = json!({
            "username": "a@example.com",
            "realname": "Alice",
            "password1": "secret12",
            "password2": "secret12",
        });

        let response = app
            .clone()
            .oneshot(post_json("/v1/auth/register", req.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(post_json("/v1/auth/register", req))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let app = app();
        app.clone()
            .oneshot(post_json(
                "/v1/auth/register",
                json!({
                    "username": "a@example.com",
                    "realname": "Alice",
                    "password1": "secret12",
                    "password2": "secret12",
                }),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(post_json(
                "/v1/auth/login",
                json!({ "username": "a@example.com", "password": "wrong" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_unauthorized() {
        let app = app();
        let response = app
            .oneshot(post_json(
                "/v1/auth/login",
                json!({ "username": "ghost@example.com", "password": "secret12" }),
            ))
            .await
            .unwrap();
        // Indistinguishable from a wrong password
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_unknown_token_is_no_content() {
        let app = app();
        let response = app
            .oneshot(post_json(
                "/v1/auth/logout",
                json!({ "session_token": "never-existed" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
