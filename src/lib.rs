//! Simple MCP Server
//!
//! A minimal "MCP"-style tool server: a stateless HTTP façade exposing a
//! fixed set of endpoints (health check, random fact, current time, echo)
//! plus a static tool-listing endpoint at `/mcp`. The `/mcp` payload is a
//! plain catalog, not a negotiated capability handshake.

pub mod core;
pub mod tools;
