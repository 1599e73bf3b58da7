// Telemetry reading HTTP routes
//
// Reads are public; writes go through the auth gate (session token or API
// key). Credentials travel inside the write body and are stripped before the
// reading is stored.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use homestat_contracts::{CreateReadingRequest, ListResponse, Reading, ReadingsQuery};
use homestat_core::{
    traits::ReadingStore, AuthGate, Collection, ReadingRecord, RequestCredentials,
};
use std::sync::Arc;

use crate::common::error_status;

/// App state for readings routes
#[derive(Clone)]
pub struct AppState {
    pub gate: AuthGate,
    pub readings: Arc<dyn ReadingStore>,
}

/// Create readings routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/readings/:collection",
            get(list_readings).post(create_reading),
        )
        .with_state(state)
}

fn parse_collection(raw: &str) -> Result<Collection, StatusCode> {
    Collection::from_str(raw).ok_or(StatusCode::NOT_FOUND)
}

/// GET /v1/readings/{collection} - Read telemetry (unauthenticated)
#[utoipa::path(
    get,
    path = "/v1/readings/{collection}",
    params(
        ("collection" = String, Path, description = "Telemetry collection name"),
        ("start_ts" = Option<f64>, Query, description = "Only readings with ts strictly greater than this")
    ),
    responses(
        (status = 200, description = "Readings in ascending ts order", body = ListResponse<Reading>),
        (status = 404, description = "Unknown collection"),
        (status = 500, description = "Internal server error")
    ),
    tag = "readings"
)]
pub async fn list_readings(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Query(query): Query<ReadingsQuery>,
) -> Result<Json<ListResponse<Reading>>, StatusCode> {
    let collection = parse_collection(&collection)?;
    let start_ts = query.start_ts.unwrap_or(0.0);

    let readings = state
        .readings
        .list_readings(collection, start_ts)
        .await
        .map_err(|e| error_status("list_readings", e))?;

    Ok(Json(ListResponse::new(
        readings
            .into_iter()
            .map(|r| Reading {
                ts: r.ts,
                data: r.data,
            })
            .collect(),
    )))
}

/// POST /v1/readings/{collection} - Record a reading (session token or API key)
#[utoipa::path(
    post,
    path = "/v1/readings/{collection}",
    params(
        ("collection" = String, Path, description = "Telemetry collection name")
    ),
    request_body = CreateReadingRequest,
    responses(
        (status = 201, description = "Reading stored", body = Reading),
        (status = 401, description = "Missing or invalid credential"),
        (status = 404, description = "Unknown collection"),
        (status = 500, description = "Internal server error")
    ),
    tag = "readings"
)]
pub async fn create_reading(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(req): Json<CreateReadingRequest>,
) -> Result<(StatusCode, Json<Reading>), StatusCode> {
    let collection = parse_collection(&collection)?;

    let credentials = RequestCredentials {
        session_token: req.session_token,
        api_key: req.api_key,
    };
    state
        .gate
        .authenticate_request(&credentials)
        .await
        .map_err(|e| error_status("create_reading", e))?;

    // Credentials end here; only ts and data are stored
    let record = ReadingRecord {
        collection,
        ts: req.ts.unwrap_or_else(|| Utc::now().timestamp() as f64),
        data: req.data,
    };
    state
        .readings
        .create_reading(record.clone())
        .await
        .map_err(|e| error_status("create_reading", e))?;

    Ok((
        StatusCode::CREATED,
        Json(Reading {
            ts: record.ts,
            data: record.data,
        }),
    ))
}
