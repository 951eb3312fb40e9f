// handlers/tenants/list.rs - GET /tenants handler

use axum::{extract::State, response::Json};

use super::TenantListResponse;
use crate::services::TenantRegistry;

pub async fn tenant_list(State(registry): State<TenantRegistry>) -> Json<TenantListResponse> {
    Json(TenantListResponse {
        tenants: registry.list(),
    })
}
