use pbiaudit::mcp::{PbiAuditServer, types::PagesDirParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{
    McpTestFixture, extract_tool_result_text, table_visual, textbox_visual, titled_visual,
};

fn params(fixture: &McpTestFixture) -> Parameters<PagesDirParams> {
    Parameters(PagesDirParams {
        pages_dir: fixture.pages_dir(),
    })
}

// ============================================================================
// scan_english_remaining tests
// ============================================================================

#[tokio::test]
async fn test_scan_textbox_content() {
    let fixture = McpTestFixture::with_visuals(vec![(
        "overview/visuals/a1",
        textbox_visual("Total Revenue"),
    )])
    .unwrap();
    let server = PbiAuditServer::new();

    let result = server.scan_english_remaining(params(&fixture)).await.unwrap();
    let text = extract_tool_result_text(&result);

    assert!(text.starts_with("ENGLISH CONTENT AUDIT\n"));
    assert!(text.contains("Found 1 suspected English strings in 1 files"));
    assert!(text.contains("File: overview/visuals/a1/visual.json"));
    assert!(text.contains("  Textbox content (1):\n    - 'Total Revenue'"));
}

#[tokio::test]
async fn test_scan_all_categories_in_order() {
    let fixture = McpTestFixture::with_visuals(vec![
        (
            "p1/visuals/b",
            table_visual(json!([
                {"nativeQueryRef": "Customer"},
                {"nativeQueryRef": "Sum of Amount", "displayName": "Total Amount"}
            ])),
        ),
        ("p1/visuals/a", titled_visual("Budget overview")),
    ])
    .unwrap();
    let server = PbiAuditServer::new();

    let result = server.scan_english_remaining(params(&fixture)).await.unwrap();
    let text = extract_tool_result_text(&result);

    let a = text.find("File: p1/visuals/a/visual.json").unwrap();
    let b = text.find("File: p1/visuals/b/visual.json").unwrap();
    assert!(a < b, "files should be sorted by path");

    assert!(text.contains("  Title text (1):\n    - 'Budget overview'"));
    assert!(text.contains("  DisplayName (1):\n    - 'Total Amount'"));
    assert!(text.contains(
        "  Missing displayName (1):\n    - 'Customer' (nativeQueryRef without displayName override)"
    ));
    assert!(text.contains("Found 3 suspected English strings in 2 files"));
}

#[tokio::test]
async fn test_scan_translated_report() {
    let fixture = McpTestFixture::with_visuals(vec![
        ("p1/visuals/a", textbox_visual("Försäljning per månad")),
        ("p1/visuals/b", titled_visual("YTD")),
        (
            "p1/visuals/c",
            table_visual(json!([{"nativeQueryRef": "Revenue", "displayName": "Intäkter"}])),
        ),
    ])
    .unwrap();
    let server = PbiAuditServer::new();

    let result = server.scan_english_remaining(params(&fixture)).await.unwrap();
    let text = extract_tool_result_text(&result);

    assert_eq!(
        text,
        "No suspected English content found. Translation appears complete!"
    );
}

#[tokio::test]
async fn test_scan_skips_corrupt_documents() {
    let fixture =
        McpTestFixture::with_visuals(vec![("p1/visuals/b", textbox_visual("Budget"))]).unwrap();
    fixture.write_file("p1/visuals/a/visual.json", "{ broken").unwrap();
    let server = PbiAuditServer::new();

    let result = server.scan_english_remaining(params(&fixture)).await.unwrap();
    let text = extract_tool_result_text(&result);

    assert!(text.contains("Found 1 suspected English strings in 1 files"));
    assert!(!text.contains("p1/visuals/a/visual.json"));
}

#[tokio::test]
async fn test_scan_respects_config_ignores() {
    let fixture = McpTestFixture::with_visuals(vec![
        ("live/visuals/a", textbox_visual("Budget")),
        ("drafts/visuals/a", textbox_visual("Forecast")),
    ])
    .unwrap();
    fixture
        .write_file(".pbiauditrc.json", r#"{ "ignores": ["drafts/**"] }"#)
        .unwrap();
    let server = PbiAuditServer::new();

    let result = server.scan_english_remaining(params(&fixture)).await.unwrap();
    let text = extract_tool_result_text(&result);

    assert!(text.contains("live/visuals/a/visual.json"));
    assert!(!text.contains("drafts"));
}

#[tokio::test]
async fn test_scan_missing_directory_is_execution_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = PbiAuditServer::new();

    let missing = fixture.pages_path().join("does-not-exist");
    let params = Parameters(PagesDirParams {
        pages_dir: missing.to_string_lossy().to_string(),
    });

    let err = server.scan_english_remaining(params).await.unwrap_err();
    assert!(err.message.starts_with("Tool execution error: "));
    assert!(err.message.contains("Directory not found"));
}
