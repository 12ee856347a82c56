/// Random Fact Tool Implementation
///
/// Serves one entry from a fixed five-element fact list, picked uniformly at
/// random on every call. The list is a process-lifetime constant; the pick is
/// unseeded (system entropy) with no reproducibility requirement.

use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::server::{ToolCatalog, ToolDescriptor};
use crate::core::utils;

/// The immutable fact list, fixed at process start.
pub const FACTS: [&str; 5] = [
    "The MCP protocol was designed to standardize AI tool integration",
    "Octopuses have three hearts and blue blood",
    "Honey never spoils - archaeologists have found edible honey in Egyptian tombs",
    "A group of flamingos is called a 'flamboyance'",
    "The shortest war in history lasted only 38-45 minutes",
];

/// Random fact endpoint handler.
///
/// Every call reselects; the distribution over the five entries is uniform.
pub async fn random_fact(counter: web::Data<AtomicU64>) -> Result<HttpResponse> {
    counter.fetch_add(1, Ordering::Relaxed);
    let fact = FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FACTS[0]);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "fact": fact,
        "timestamp": utils::iso8601(Utc::now())
    })))
}

/// Register the random fact tool in the `/mcp` catalog.
pub fn register(catalog: &mut ToolCatalog) {
    catalog.register(ToolDescriptor {
        name: "get_random_fact".to_string(),
        description: "Get a random interesting fact".to_string(),
        url: "/random-fact".to_string(),
        method: "GET".to_string(),
    });
}
