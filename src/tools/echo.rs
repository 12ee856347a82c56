/// Echo Endpoint Implementation
///
/// Accepts an arbitrary JSON object and returns it unmodified inside a
/// wrapper object. No schema is enforced beyond "the body is a JSON object";
/// malformed or non-object bodies are rejected by the framework's JSON
/// extractor with a 4xx response before this handler runs.

use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::utils;

/// Echo endpoint handler.
///
/// Wraps the posted object with a timestamp and a confirmation message. The
/// payload passes through untouched. This endpoint is intentionally not
/// listed in the `/mcp` catalog.
pub async fn echo(
    counter: web::Data<AtomicU64>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse> {
    counter.fetch_add(1, Ordering::Relaxed);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "echoed": body.into_inner(),
        "timestamp": utils::iso8601(Utc::now()),
        "message": "Echo successful"
    })))
}
