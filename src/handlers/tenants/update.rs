// handlers/tenants/update.rs - PUT /tenants/:namespace handler

use axum::{
    extract::{Path, State},
    response::Json,
};

use super::{JsonBody, TenantMutationResponse, UpdateTenantRequest};
use crate::error::ApiError;
use crate::services::TenantRegistry;

/// Replace the token of an existing tenant. Token presence is checked before
/// the lookup, so an empty token yields 400 even for unknown namespaces.
pub async fn tenant_update(
    State(registry): State<TenantRegistry>,
    Path(namespace): Path<String>,
    JsonBody(request): JsonBody<UpdateTenantRequest>,
) -> Result<Json<TenantMutationResponse>, ApiError> {
    let tenant = registry.update_token(&namespace, request.token.as_deref().unwrap_or_default())?;

    Ok(Json(TenantMutationResponse {
        message: "tenant updated".to_string(),
        tenant,
    }))
}
