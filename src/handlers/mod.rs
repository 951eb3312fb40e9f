// handlers/mod.rs - HTTP handlers
//
// One file per route, grouped by resource:
// - tenants/ → /tenants and /tenants/:namespace (registry CRUD)
// - health   → /health liveness probe and the unknown-route fallback
pub mod health;
pub mod tenants;

pub use health::{health, route_not_found};
