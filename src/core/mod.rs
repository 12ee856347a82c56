/// Core Server Framework Module
///
/// This module contains the core server implementation including:
/// - server.rs: HTTP server setup, route handlers, and the static tool catalog
/// - utils.rs: Environment configuration and timestamp helpers

pub mod server;
pub mod utils;
