// handlers/tenants/delete.rs - DELETE /tenants/:namespace handler

use axum::{
    extract::{Path, State},
    response::Json,
};

use super::TenantRemovedResponse;
use crate::error::ApiError;
use crate::services::TenantRegistry;

pub async fn tenant_delete(
    State(registry): State<TenantRegistry>,
    Path(namespace): Path<String>,
) -> Result<Json<TenantRemovedResponse>, ApiError> {
    let namespace = registry.delete(&namespace)?;

    Ok(Json(TenantRemovedResponse {
        message: "tenant removed".to_string(),
        namespace,
    }))
}
