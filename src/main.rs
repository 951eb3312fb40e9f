use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tenant_registry::app::app;
use tenant_registry::config::ServiceConfig;
use tenant_registry::services::TenantRegistry;

#[derive(Parser)]
#[command(name = "tenant-registry")]
#[command(about = "In-memory tenant registry HTTP service")]
#[command(version)]
struct Args {
    #[arg(long, help = "Port to listen on (overrides SERVICE_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Address to bind (overrides SERVICE_HOST)")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SERVICE_PORT etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = ServiceConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    let registry = TenantRegistry::seeded();
    let app = app(registry.clone(), &config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Tenants API running on port {}", config.port);
    tracing::info!("Initial tenants: {}", registry.len());
    for namespace in registry.namespaces() {
        tracing::info!("  - {}", namespace);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Tenants API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
