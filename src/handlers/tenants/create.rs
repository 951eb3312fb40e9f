// handlers/tenants/create.rs - POST /tenants handler
// Register a new tenant at the end of the list

use axum::{extract::State, http::StatusCode, response::Json};

use super::{CreateTenantRequest, JsonBody, TenantMutationResponse};
use crate::error::ApiError;
use crate::services::TenantRegistry;

/**
 * POST /tenants - Create a tenant
 *
 * Expected Input:
 * ```json
 * { "namespace": "string", "token": "string" }
 * ```
 *
 * Missing namespace, missing token, or both produce the same 400. A namespace
 * that is already registered produces 409 and leaves the existing record alone.
 */
pub async fn tenant_create(
    State(registry): State<TenantRegistry>,
    JsonBody(request): JsonBody<CreateTenantRequest>,
) -> Result<(StatusCode, Json<TenantMutationResponse>), ApiError> {
    let tenant = registry.create(
        request.namespace.as_deref().unwrap_or_default(),
        request.token.as_deref().unwrap_or_default(),
    )?;

    Ok((
        StatusCode::CREATED,
        Json(TenantMutationResponse {
            message: "tenant added".to_string(),
            tenant,
        }),
    ))
}
