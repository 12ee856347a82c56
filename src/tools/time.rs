/// Current Time Tool Implementation
///
/// Reports the current UTC time in two representations: an ISO 8601 string
/// and fractional seconds since the Unix epoch.

use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::server::{ToolCatalog, ToolDescriptor};
use crate::core::utils;

/// Current time endpoint handler.
///
/// The clock is read once; both representations derive from that single
/// instant so they always agree.
pub async fn current_time(counter: web::Data<AtomicU64>) -> Result<HttpResponse> {
    counter.fetch_add(1, Ordering::Relaxed);
    let now = Utc::now();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "current_time": utils::iso8601(now),
        "timezone": "UTC",
        "unix_timestamp": utils::unix_seconds(now)
    })))
}

/// Register the current time tool in the `/mcp` catalog.
pub fn register(catalog: &mut ToolCatalog) {
    catalog.register(ToolDescriptor {
        name: "get_current_time".to_string(),
        description: "Get the current time".to_string(),
        url: "/time".to_string(),
        method: "GET".to_string(),
    });
}
