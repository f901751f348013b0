use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    core::Scanner,
    reports::{format_coverage, format_findings, format_missing_display_names},
};

use super::types::PagesDirParams;

#[derive(Clone)]
pub struct PbiAuditServer {
    tool_router: ToolRouter<Self>,
}

impl Default for PbiAuditServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PbiAuditServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan all documents for suspected English content
    #[tool(
        description = "Scan all visual.json files for suspected English content (titles, displayName values, textbox text)"
    )]
    pub async fn scan_english_remaining(
        &self,
        params: Parameters<PagesDirParams>,
    ) -> Result<CallToolResult, McpError> {
        let pages_dir = Path::new(&params.0.pages_dir);
        let findings = scanner_for(pages_dir)?
            .scan(pages_dir)
            .map_err(execution_error)?;

        Ok(text_result(format_findings(&findings.items)))
    }

    /// Find projections relying on their raw nativeQueryRef
    #[tool(description = "Find projections with nativeQueryRef but no displayName override")]
    pub async fn scan_missing_displaynames(
        &self,
        params: Parameters<PagesDirParams>,
    ) -> Result<CallToolResult, McpError> {
        let pages_dir = Path::new(&params.0.pages_dir);
        let missing = scanner_for(pages_dir)?
            .missing_display_names(pages_dir)
            .map_err(execution_error)?;

        Ok(text_result(format_missing_display_names(&missing.items)))
    }

    /// Summarize coverage and give a PASS/FAIL verdict
    #[tool(description = "Run all scans and produce summary report with PASS/FAIL verdict")]
    pub async fn validate_translation_coverage(
        &self,
        params: Parameters<PagesDirParams>,
    ) -> Result<CallToolResult, McpError> {
        let pages_dir = Path::new(&params.0.pages_dir);
        let scanner = scanner_for(pages_dir)?;
        let findings = scanner.scan(pages_dir).map_err(execution_error)?;
        let coverage = scanner.coverage(pages_dir).map_err(execution_error)?;

        Ok(text_result(format_coverage(
            &findings.items,
            &coverage.items,
        )))
    }
}

fn scanner_for(pages_dir: &Path) -> Result<Scanner, McpError> {
    Scanner::load(pages_dir).map_err(execution_error)
}

fn execution_error(err: anyhow::Error) -> McpError {
    McpError::internal_error(format!("Tool execution error: {:#}", err), None)
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_handler]
impl ServerHandler for PbiAuditServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "pbiaudit helps verify that a Power BI report (.pbip) has been fully translated.\n\n\
                 Every tool takes pages_dir, the path to the report's definition/pages folder.\n\n\
                 Available tools:\n\
                 1. validate_translation_coverage - Summary counts with a PASS/FAIL verdict\n\
                 2. scan_english_remaining - Suspected English titles, displayNames and textbox text per file\n\
                 3. scan_missing_displaynames - Projections with nativeQueryRef but no displayName override\n\n\
                 Recommended Workflow:\n\
                 1. Run validate_translation_coverage to see the overall state\n\
                 2. On FAIL, run scan_english_remaining and translate the listed strings\n\
                 3. Use scan_missing_displaynames to add displayName overrides\n\
                 4. Re-run validate_translation_coverage until the verdict is PASS"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = PbiAuditServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
