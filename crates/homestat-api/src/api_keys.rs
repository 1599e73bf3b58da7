// API key management HTTP routes
//
// Every operation here is session-gated: the caller proves a live session
// before issuing, listing, or revoking keys. Keys themselves cannot manage
// keys.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use homestat_contracts::{
    ApiKeyInfo, ApiKeyResponse, CreateApiKeyRequest, ListResponse, RevokeApiKeyRequest,
    SessionQuery,
};
use homestat_core::{ApiKeyManager, SessionManager};
use uuid::Uuid;

use crate::common::error_status;

/// App state for API key routes
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub api_keys: ApiKeyManager,
}

/// Create API key routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/api-keys",
            post(create_api_key).get(list_api_keys).delete(revoke_api_key),
        )
        .with_state(state)
}

async fn require_session(state: &AppState, token: &str) -> Result<Uuid, StatusCode> {
    state
        .sessions
        .validate(token)
        .await
        .map_err(|e| error_status("api-keys", e))?
        .ok_or(StatusCode::UNAUTHORIZED)
}

/// POST /v1/api-keys - Issue a new key for the session holder
#[utoipa::path(
    post,
    path = "/v1/api-keys",
    request_body = CreateApiKeyRequest,
    responses(
        (status = 201, description = "Key issued; the full key is returned only here", body = ApiKeyResponse),
        (status = 401, description = "Unknown or expired session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "api-keys"
)]
pub async fn create_api_key(
    State(state): State<AppState>,
    Json(req): Json<CreateApiKeyRequest>,
) -> Result<(StatusCode, Json<ApiKeyResponse>), StatusCode> {
    let user_id = require_session(&state, &req.session_token).await?;

    let issued = state
        .api_keys
        .issue(user_id)
        .await
        .map_err(|e| error_status("create_api_key", e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiKeyResponse {
            api_key: issued.key,
            expires_at: issued.expires_at,
        }),
    ))
}

/// GET /v1/api-keys - List the session holder's keys
#[utoipa::path(
    get,
    path = "/v1/api-keys",
    params(
        ("session_token" = String, Query, description = "Session token")
    ),
    responses(
        (status = 200, description = "Keys owned by the caller", body = ListResponse<ApiKeyInfo>),
        (status = 401, description = "Unknown or expired session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "api-keys"
)]
pub async fn list_api_keys(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<ListResponse<ApiKeyInfo>>, StatusCode> {
    let user_id = require_session(&state, &query.session_token).await?;

    let keys = state
        .api_keys
        .list(user_id)
        .await
        .map_err(|e| error_status("list_api_keys", e))?;

    Ok(Json(ListResponse::new(
        keys.into_iter()
            .map(|k| ApiKeyInfo {
                key: k.key,
                expires_at: k.expires_at,
            })
            .collect(),
    )))
}

/// DELETE /v1/api-keys - Revoke one of the session holder's keys
#[utoipa::path(
    delete,
    path = "/v1/api-keys",
    request_body = RevokeApiKeyRequest,
    responses(
        (status = 204, description = "Key revoked (idempotent)"),
        (status = 401, description = "Unknown or expired session, or key owned by someone else"),
        (status = 500, description = "Internal server error")
    ),
    tag = "api-keys"
)]
pub async fn revoke_api_key(
    State(state): State<AppState>,
    Json(req): Json<RevokeApiKeyRequest>,
) -> Result<StatusCode, StatusCode> {
    let user_id = require_session(&state, &req.session_token).await?;

    // A live key owned by someone else cannot be revoked through this
    // session; unknown and expired keys fall through to the idempotent delete
    if let Some(owner) = state
        .api_keys
        .validate(&req.api_key)
        .await
        .map_err(|e| error_status("revoke_api_key", e))?
    {
        if owner != user_id {
            return Err(StatusCode::UNAUTHORIZED);
        }
    }

    state
        .api_keys
        .revoke(&req.api_key)
        .await
        .map_err(|e| error_status("revoke_api_key", e))?;

    Ok(StatusCode::NO_CONTENT)
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

    async fn app_with_session() -> (Router, String) {
        let store = Arc::new(InMemoryAuthStore::new());
        let config = AuthConfig::default();
        let sessions = SessionManager::new(store.clone(), config.session_ttl());
        let session = sessions.create_session(Uuid::now_v7()).await.unwrap();
        let state = AppState {
            sessions,
            api_keys: ApiKeyManager::new(store, config.api_key_ttl()),
        };
        (routes(state), session.token)
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
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
    async fn test_issue_list_revoke_over_http() {
        let (app, token) = app_with_session().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/api-keys",
                json!({ "session_token": token }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let issued = body_json(response).await;
        let key = issued["api_key"].as_str().unwrap().to_string();
        // 256 random bytes, hex encoded
        assert_eq!(key.len(), 512);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/v1/api-keys?session_token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed["data"][0]["key"], key);

        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                "/v1/api-keys",
                json!({ "session_token": token, "api_key": key }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/v1/api-keys?session_token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert!(listed["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_key_operations_require_live_session() {
        let (app, _) = app_with_session().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/api-keys",
                json!({ "session_token": "bogus" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/api-keys?session_token=bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_cannot_revoke_someone_elses_key() {
        let store = Arc::new(InMemoryAuthStore::new());
        let config = AuthConfig::default();
        let sessions = SessionManager::new(store.clone(), config.session_ttl());
        let api_keys = ApiKeyManager::new(store, config.api_key_ttl());

        let alice = sessions.create_session(Uuid::now_v7()).await.unwrap();
        let bobs_key = api_keys.issue(Uuid::now_v7()).await.unwrap();

        let app = routes(AppState {
            sessions,
            api_keys: api_keys.clone(),
        });

        let response = app
            .oneshot(json_request(
                "DELETE",
                "/v1/api-keys",
                json!({ "session_token": alice.token, "api_key": bobs_key.key }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // The key is still valid
        assert!(api_keys.validate(&bobs_key.key).await.unwrap().is_some());
    }
}
