/// Tools Module
///
/// This module contains the tool endpoint handlers. Each tool that appears in
/// the `/mcp` catalog exports a `register` function to add its descriptor
/// during server initialization; echo is callable but deliberately
/// unlisted.

pub mod echo;
pub mod facts;
pub mod time;
