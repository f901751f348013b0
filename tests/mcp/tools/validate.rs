use std::fs;

use pbiaudit::mcp::{PbiAuditServer, types::PagesDirParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_text, table_visual, textbox_visual};

// ============================================================================
// validate_translation_coverage tests
// ============================================================================

async fn validate(fixture: &McpTestFixture) -> String {
    let server = PbiAuditServer::new();
    let params = Parameters(PagesDirParams {
        pages_dir: fixture.pages_dir(),
    });
    let result = server.validate_translation_coverage(params).await.unwrap();
    extract_tool_result_text(&result)
}

#[tokio::test]
async fn test_validate_fails_on_textbox_english() {
    let fixture =
        McpTestFixture::with_visuals(vec![("p1/visuals/a", textbox_visual("Total Revenue"))])
            .unwrap();

    let text = validate(&fixture).await;

    assert!(text.starts_with("TRANSLATION COVERAGE VALIDATION\n"));
    assert!(text.contains("  Textbox content: 1\n"));
    assert!(text.contains("Total suspected English strings: 1\n"));
    assert!(text.contains("VERDICT: FAIL\n"));
    assert!(text.ends_with("Translation incomplete. Run scan_english_remaining for details."));
}

#[tokio::test]
async fn test_validate_passes_translated_report() {
    let fixture = McpTestFixture::with_visuals(vec![(
        "p1/visuals/a",
        table_visual(json!([
            {"nativeQueryRef": "Revenue", "displayName": "Intäkter"},
            {"nativeQueryRef": "Försäljning"}
        ])),
    )])
    .unwrap();

    let text = validate(&fixture).await;

    assert!(text.contains("Total projections: 2\n"));
    assert!(text.contains("Projections with displayName: 1 (50.0%)\n"));
    assert!(text.contains("Projections without displayName: 1\n"));
    assert!(text.contains("VERDICT: PASS\n"));
    assert!(text.ends_with("No suspected English content found. Translation appears complete!"));
}

#[tokio::test]
async fn test_validate_counts_empty_display_name_as_covered() {
    let fixture = McpTestFixture::with_visuals(vec![(
        "p1/visuals/a",
        table_visual(json!([{"nativeQueryRef": "Revenue", "displayName": ""}])),
    )])
    .unwrap();

    let text = validate(&fixture).await;

    assert!(text.contains("Projections with displayName: 1 (100.0%)\n"));
    assert!(text.contains("  Missing displayName (English nativeQueryRef): 0\n"));
    assert!(text.contains("VERDICT: PASS\n"));
}

#[tokio::test]
async fn test_validate_empty_pages_dir() {
    let fixture = McpTestFixture::new().unwrap();

    let text = validate(&fixture).await;

    assert!(text.contains("Total projections: 0\n"));
    assert!(text.contains("Projections with displayName: 0 (0.0%)\n"));
    assert!(text.contains("VERDICT: PASS\n"));
}

#[tokio::test]
async fn test_validate_rejects_file_as_pages_dir() {
    let fixture =
        McpTestFixture::with_visuals(vec![("p1", textbox_visual("Budget"))]).unwrap();
    let server = PbiAuditServer::new();

    let file = fixture.pages_path().join("p1").join("visual.json");
    let params = Parameters(PagesDirParams {
        pages_dir: file.to_string_lossy().to_string(),
    });

    let err = server
        .validate_translation_coverage(params)
        .await
        .unwrap_err();
    assert!(err.message.contains("Not a directory"));
}

#[tokio::test]
async fn test_validate_ignores_config_above_pages_dir() {
    let fixture =
        McpTestFixture::with_visuals(vec![("p1", textbox_visual("Total Revenue"))]).unwrap();
    fs::write(
        fixture.root().join(".pbiauditrc.json"),
        r#"{ "ignores": ["**"] }"#,
    )
    .unwrap();

    let text = validate(&fixture).await;

    assert!(text.contains("  Textbox content: 1\n"));
    assert!(text.contains("VERDICT: FAIL\n"));
}

#[tokio::test]
async fn test_validate_missing_dir_reported_before_config() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".pbiauditrc.json", "{ broken").unwrap();
    let server = PbiAuditServer::new();

    let missing = fixture.pages_path().join("nope");
    let params = Parameters(PagesDirParams {
        pages_dir: missing.to_string_lossy().to_string(),
    });

    let err = server
        .validate_translation_coverage(params)
        .await
        .unwrap_err();
    assert!(err.message.contains("Directory not found"));
    assert!(!err.message.contains("config"));
}
