// handlers/tenants/mod.rs - Tenant registry handlers
//
// REST surface over the in-memory tenant registry. Every handler receives the
// shared `TenantRegistry` as router state and converts registry failures into
// `{ "error": ... }` bodies through `ApiError`.

use serde::{Deserialize, Serialize};

use crate::types::Tenant;

pub mod body;
pub mod create; // POST /tenants
pub mod delete; // DELETE /tenants/:namespace
pub mod list; // GET /tenants
pub mod update; // PUT /tenants/:namespace

pub use body::JsonBody;
pub use create::tenant_create;
pub use delete::tenant_delete;
pub use list::tenant_list;
pub use update::tenant_update;

/// Body of `POST /tenants`. Absent or `null` fields count as missing, as does
/// a missing body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTenantRequest {
    pub namespace: Option<String>,
    pub token: Option<String>,
}

/// Body of `PUT /tenants/:namespace`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTenantRequest {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TenantListResponse {
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Serialize)]
pub struct TenantMutationResponse {
    pub message: String,
    pub tenant: Tenant,
}

#[derive(Debug, Serialize)]
pub struct TenantRemovedResponse {
    pub message: String,
    pub namespace: String,
}
