use pbiaudit::mcp::{PbiAuditServer, types::PagesDirParams};
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_text, table_visual, textbox_visual};

// ============================================================================
// scan_missing_displaynames tests
// ============================================================================

#[tokio::test]
async fn test_missing_grouped_by_verdict() {
    let fixture = McpTestFixture::with_visuals(vec![(
        "p1/visuals/a",
        table_visual(json!([
            {"nativeQueryRef": "Försäljning"},
            {"nativeQueryRef": "Revenue"},
            {"nativeQueryRef": "Cost", "displayName": "Kostnad"}
        ])),
    )])
    .unwrap();
    let server = PbiAuditServer::new();

    let params = Parameters(PagesDirParams {
        pages_dir: fixture.pages_dir(),
    });
    let result = server.scan_missing_displaynames(params).await.unwrap();
    let text = extract_tool_result_text(&result);

    let expected = [
        "MISSING DISPLAYNAME AUDIT",
        "==================================================",
        "",
        "Found 2 projections without displayName",
        "",
        "SUSPECTED ENGLISH (1):",
        "  p1/visuals/a/visual.json",
        "    nativeQueryRef: 'Revenue'",
        "    visualType: tableEx",
        "",
        "OTHER (not suspected English, 1):",
        "  p1/visuals/a/visual.json",
        "    nativeQueryRef: 'Försäljning'",
        "    visualType: tableEx",
        "",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_missing_all_clear() {
    let fixture = McpTestFixture::with_visuals(vec![
        (
            "p1/visuals/a",
            table_visual(json!([{"nativeQueryRef": "Revenue", "displayName": ""}])),
        ),
        ("p1/visuals/b", textbox_visual("Budget")),
    ])
    .unwrap();
    let server = PbiAuditServer::new();

    let params = Parameters(PagesDirParams {
        pages_dir: fixture.pages_dir(),
    });
    let result = server.scan_missing_displaynames(params).await.unwrap();

    assert_eq!(
        extract_tool_result_text(&result),
        "All projections have displayName overrides. Good!"
    );
}

#[tokio::test]
async fn test_missing_unknown_visual_type() {
    let fixture = McpTestFixture::with_visuals(vec![(
        "p1/visuals/a",
        json!({
            "visual": {"query": {"queryState": {"Rows": {"projections": [{"nativeQueryRef": "Year"}]}}}}
        }),
    )])
    .unwrap();
    let server = PbiAuditServer::new();

    let params = Parameters(PagesDirParams {
        pages_dir: fixture.pages_dir(),
    });
    let result = server.scan_missing_displaynames(params).await.unwrap();
    let text = extract_tool_result_text(&result);

    assert!(text.contains("SUSPECTED ENGLISH (1):"));
    assert!(text.contains("    visualType: unknown"));
}

#[tokio::test]
async fn test_missing_lists_non_string_reference_as_other() {
    let fixture = McpTestFixture::with_visuals(vec![(
        "p1/visuals/a",
        table_visual(json!([{"nativeQueryRef": 42}])),
    )])
    .unwrap();
    let server = PbiAuditServer::new();

    let params = Parameters(PagesDirParams {
        pages_dir: fixture.pages_dir(),
    });
    let result = server.scan_missing_displaynames(params).await.unwrap();
    let text = extract_tool_result_text(&result);

    assert!(text.contains("Found 1 projections without displayName"));
    assert!(text.contains(
        "OTHER (not suspected English, 1):\n  p1/visuals/a/visual.json\n    nativeQueryRef: '42'\n"
    ));
}
