//! pbiaudit - translation audit for Power BI report definitions
//!
//! pbiaudit scans the `visual.json` documents of an exported `.pbip` report
//! for text that still looks English: visual titles, projection displayName
//! overrides, projections without an override, and textbox content. The
//! audit is available as CLI commands and as tools of an MCP server.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Classifier, extractor and corpus scanner
//! - `mcp`: Model Context Protocol server implementation
//! - `reports`: Plain-text report formatters

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod reports;
