// handlers/health.rs - GET /health handler and router fallback

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::TenantRegistry;

pub async fn health(State(registry): State<TenantRegistry>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "tenants": registry.len(),
        "timestamp": chrono::Utc::now(),
    }))
}

pub async fn route_not_found() -> ApiError {
    ApiError::not_found("route not found")
}
