/// Simple MCP Server Implementation
///
/// This module contains the core server implementation including:
/// - Service metadata shared across worker threads
/// - The static tool catalog returned by the `/mcp` endpoint
/// - Route handlers for the fixed endpoints
/// - HTTP server setup with Actix Web

use actix_web::{
    web, App, HttpResponse, HttpServer, Result,
    middleware::{Compress, DefaultHeaders, Logger},
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use crate::core::utils;
use crate::tools;

/// Service name reported in the root message and `/mcp` server_info.
pub const SERVER_NAME: &str = "Simple MCP Server";
/// Service version. Both places that expose a version (service metadata and
/// `/mcp` server_info) read this constant so they cannot drift apart.
pub const SERVER_VERSION: &str = "1.0.0";
/// One-line service description for `/mcp` server_info.
pub const SERVER_DESCRIPTION: &str = "A simple MCP server for testing";

/// Application state shared across all worker threads.
///
/// Cloned for each worker thread; read-only at runtime.
#[derive(Clone)]
pub struct AppState {
    /// Service name as reported in `/mcp` server_info
    pub server_name: String,
    /// Service version string as reported in `/mcp` server_info
    pub server_version: String,
    /// Service description as reported in `/mcp` server_info
    pub description: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            server_name: SERVER_NAME.to_string(),
            server_version: SERVER_VERSION.to_string(),
            description: SERVER_DESCRIPTION.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Static tool descriptor returned by the `/mcp` listing.
///
/// Each descriptor names a callable endpoint: a unique tool name, a
/// human-readable description, and the URL/method pair to invoke it with.
#[derive(Serialize, Debug, Clone)]
pub struct ToolDescriptor {
    /// Unique tool identifier (e.g., "get_random_fact")
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// Path of the endpoint implementing the tool
    pub url: String,
    /// HTTP method the endpoint expects
    pub method: String,
}

/// Catalog of tools advertised by the `/mcp` endpoint.
///
/// Assembled once at startup from each tool module's `register` call and
/// never mutated afterwards. The catalog deliberately lists only the three
/// "tool" endpoints; `/` and `/echo` are not advertised.
pub struct ToolCatalog {
    /// Descriptors in registration order
    pub tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Add a tool descriptor to the catalog.
    pub fn register(&mut self, tool: ToolDescriptor) {
        self.tools.push(tool);
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Root endpoint handler.
///
/// Returns a constant running-message so a browser hit shows the server is up.
async fn root(counter: web::Data<AtomicU64>) -> Result<HttpResponse> {
    counter.fetch_add(1, Ordering::Relaxed);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Simple MCP Server is running!"
    })))
}

/// Health check endpoint handler.
///
/// Returns a healthy status together with the current wall-clock time.
/// Used by load balancers and monitoring systems to verify server availability.
async fn health(counter: web::Data<AtomicU64>) -> Result<HttpResponse> {
    counter.fetch_add(1, Ordering::Relaxed);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": utils::iso8601(Utc::now())
    })))
}

/// MCP tool-listing endpoint handler.
///
/// Returns the static catalog plus server_info. Entirely static: no
/// negotiation, no dynamic discovery, and any request body is ignored.
async fn mcp_listing(
    state: web::Data<AppState>,
    catalog: web::Data<Arc<ToolCatalog>>,
    counter: web::Data<AtomicU64>,
) -> Result<HttpResponse> {
    counter.fetch_add(1, Ordering::Relaxed);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "tools": catalog.tools,
        "server_info": {
            "name": state.server_name,
            "version": state.server_version,
            "description": state.description
        }
    })))
}

/// Metrics endpoint handler for monitoring.
///
/// Returns the total number of requests handled since server start.
///
/// # Arguments
/// * `counter` - Atomic counter tracking total requests
async fn metrics_handler(counter: web::Data<AtomicU64>) -> Result<HttpResponse> {
    let count = counter.load(Ordering::Relaxed);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "requests_total": count,
        "status": "ok"
    })))
}

/// Build the tool catalog.
///
/// Called during server startup. Each tool module registers its own
/// descriptor; the health check descriptor is registered here since its
/// handler lives in this module. Echo and the root message are intentionally
/// absent from the catalog.
///
/// # Returns
/// An Arc-wrapped ToolCatalog containing the three advertised tools
pub fn initialize_catalog() -> Arc<ToolCatalog> {
    let mut catalog = ToolCatalog::new();

    tools::facts::register(&mut catalog);
    tools::time::register(&mut catalog);
    catalog.register(ToolDescriptor {
        name: "health_check".to_string(),
        description: "Check server health status".to_string(),
        url: "/health".to_string(),
        method: "GET".to_string(),
    });

    Arc::new(catalog)
}

/// Register the route table.
///
/// Shared between `run_server_http` and the integration tests so both serve
/// exactly the same routes. Unmatched routes fall through to the framework's
/// 404 response.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health))
        .route("/random-fact", web::get().to(tools::facts::random_fact))
        .route("/time", web::get().to(tools::time::current_time))
        .route("/echo", web::post().to(tools::echo::echo))
        .route("/mcp", web::post().to(mcp_listing))
        .route("/metrics", web::get().to(metrics_handler));
}

/// Run the HTTP server.
///
/// Configures and starts an Actix Web HTTP server with settings suited to
/// high-traffic deployments.
///
/// # Arguments
/// * `host` - Bind address (e.g., "127.0.0.1")
/// * `port` - Port number to listen on
///
/// # Configuration
/// The server is configured with:
/// - Worker threads: Auto-detected from CPU count (max 16)
/// - Max connections: 10,000 concurrent connections
/// - Connection rate limit: 1,000 connections per second
/// - Keep-alive: 30 seconds
/// - Request timeout: 30 seconds
/// - Disconnect timeout: 2 seconds
/// - Shutdown timeout: 10 seconds
pub async fn run_server_http(host: String, port: u16) -> std::io::Result<()> {
    use std::time::Duration;

    let bind_addr = format!("{}:{}", host, port);

    // Application state and catalog are built once and shared read-only
    // across all worker threads.
    let app_state = web::Data::new(AppState::new());
    let catalog = web::Data::new(initialize_catalog());

    // Atomic request counter for the metrics endpoint. Lock-free counting
    // across worker threads.
    let request_count = web::Data::new(AtomicU64::new(0));

    // Worker thread count defaults to CPU count, capped at 16 to avoid
    // excessive context switching. Can be overridden via WORKER_THREADS.
    let workers = std::env::var("WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or_else(|| num_cpus::get().clamp(1, 16));

    info!("Starting Simple MCP Server on http://{}", bind_addr);
    info!("MCP endpoint: http://{}/mcp", bind_addr);
    info!("Health check: http://{}/health", bind_addr);
    info!(version = SERVER_VERSION, workers, "HTTP server configured");

    HttpServer::new(move || {
        App::new()
            // Share application state with all routes
            .app_data(app_state.clone())
            .app_data(catalog.clone())
            .app_data(request_count.clone())
            // Enable compression for JSON responses (gzip/brotli)
            .wrap(Compress::default())
            // Add security headers to all responses
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block")),
            )
            // Request logging: %r = request line, %s = status, %Dms = duration
            .wrap(Logger::new("%r %s %Dms"))
            .configure(routes)
    })
    .workers(workers)
    // Connection limits for high-traffic scenarios
    .max_connections(10000)
    .max_connection_rate(1000)
    // Timeout configurations to prevent resource exhaustion
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_secs(30))
    .client_disconnect_timeout(Duration::from_secs(2))
    // Graceful shutdown timeout
    .shutdown_timeout(10)
    .bind(&bind_addr)?
    .run()
    .await
}
