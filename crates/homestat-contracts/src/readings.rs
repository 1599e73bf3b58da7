// Telemetry DTOs for the public API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One sensor reading as served to dashboard clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Reading {
    /// Unix seconds
    pub ts: f64,
    /// Flat mapping of sensor fields to values
    pub data: serde_json::Value,
}

/// Query parameters for reading retrieval
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReadingsQuery {
    /// Only readings with ts strictly greater than this are returned
    #[serde(default)]
    pub start_ts: Option<f64>,
}

/// Request to record a reading through the dashboard-facing write endpoint.
///
/// Either a session token or an API key must be present; credentials are
/// stripped before the reading is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateReadingRequest {
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Unix seconds; stamped server-side when absent
    #[serde(default)]
    pub ts: Option<f64>,
    pub data: serde_json::Value,
}
