use axum::{
    http::HeaderValue,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::handlers;
use crate::services::TenantRegistry;

/// Build the full HTTP application around a registry instance.
pub fn app(registry: TenantRegistry, config: &ServiceConfig) -> Router {
    Router::new()
        .route(
            "/health",
            get(handlers::health).fallback(handlers::route_not_found),
        )
        .merge(tenant_routes())
        .fallback(handlers::route_not_found)
        .with_state(registry)
        // Global middleware
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

// Unsupported methods on known paths answer like unknown routes.
fn tenant_routes() -> Router<TenantRegistry> {
    use handlers::tenants;

    Router::new()
        .route(
            "/tenants",
            get(tenants::tenant_list)
                .post(tenants::tenant_create)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/tenants/:namespace",
            put(tenants::tenant_update)
                .delete(tenants::tenant_delete)
                .fallback(handlers::route_not_found),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
