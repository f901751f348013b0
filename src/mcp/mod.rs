//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes the translation audit to AI
//! assistants over stdio. Each tool returns one plain-text report.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter types

mod server;
pub mod types;

pub use server::{PbiAuditServer, run_server};
