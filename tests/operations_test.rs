mod common;

use common::*;
use refactor_bridge_mcp::errors::BridgeErrorKind;
use refactor_bridge_mcp::operations::RefactoringOperations;
use refactor_bridge_mcp::tool_router::ToolRouter;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::{Map, Value, json};
use wiremock::matchers::{any, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONNECT_FAILURE: &str =
    "Error: Cannot connect to PyCharm\nIs PyCharm running with the Refactoring Bridge plugin installed?";

fn text_of(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).unwrap();
    value["content"][0]["text"].as_str().unwrap().to_string()
}

fn tool_call(name: &str, arguments: Value) -> CallToolRequestParam {
    let arguments: Map<String, Value> = match arguments {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    CallToolRequestParam {
        name: name.to_string().into(),
        arguments: Some(arguments),
    }
}

/// Run every operation once and collect the rendered reports
async fn run_every_operation(operations: &RefactoringOperations) -> Vec<(&'static str, String)> {
    vec![
        ("bridge_status", operations.bridge_status().await.unwrap()),
        ("list_projects", operations.list_projects().await.unwrap()),
        ("rename", operations.rename_symbol(rename_param(false)).await.unwrap()),
        ("move", operations.move_element(move_param(false)).await.unwrap()),
        (
            "extract_method",
            operations
                .extract_method(extract_method_param(false))
                .await
                .unwrap(),
        ),
        (
            "extract_variable",
            operations
                .extract_variable(extract_variable_param(false))
                .await
                .unwrap(),
        ),
        ("inline", operations.inline_element(inline_param(false)).await.unwrap()),
        (
            "change_signature",
            operations
                .change_signature(change_signature_param(false))
                .await
                .unwrap(),
        ),
        ("safe_delete", operations.safe_delete(safe_delete_param()).await.unwrap()),
        ("find_usages", operations.find_usages(find_usages_param()).await.unwrap()),
    ]
}

#[tokio::test]
async fn test_rename_operation_renders_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/refactor/rename"))
        .and(body_partial_json(json!({ "newName": "new_name", "preview": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "changes": [{ "file": "a.py", "line": 10, "oldText": "old", "newText": "new" }],
            "filesModified": 1,
            "usagesUpdated": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    let report = operations.rename_symbol(rename_param(true)).await.unwrap();

    assert!(report.starts_with("Preview: Renaming to 'new_name' would affect:"));
    assert!(report.contains("Files modified: 1"));
    assert!(report.contains("Usages updated: 1"));
    assert!(report.contains("a.py:10\n    old → new"));
}

#[tokio::test]
async fn test_safe_delete_blocked_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/refactor/safe-delete"))
        .and(body_partial_json(json!({ "searchForUsages": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "deleted": false,
            "usagesFound": 2,
            "usages": [
                { "file": "src/a.py", "line": 3, "column": 9, "text": "helper()" },
                { "file": "src/b.py", "line": 7, "column": 1, "text": "helper = 2", "isWriteAccess": true }
            ]
        })))
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    let report = operations.safe_delete(safe_delete_param()).await.unwrap();

    assert!(report.contains("Cannot delete: 2 usage(s) found:"));
    assert!(report.contains("src/a.py:3:9"));
    assert!(report.contains("src/b.py:7:1"));
    assert!(report.ends_with("Remove or update these usages before deleting."));
}

#[tokio::test]
async fn test_application_errors_render_uniformly_for_every_operation() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Element not found",
            "details": "No symbol at specified position"
        })))
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    for (operation, report) in run_every_operation(&operations).await {
        assert_eq!(
            report, "Error: Element not found\nNo symbol at specified position",
            "{operation}"
        );
    }
}

#[tokio::test]
async fn test_connectivity_errors_render_uniformly_for_every_operation() {
    let operations = RefactoringOperations::new(unreachable_config());
    for (operation, report) in run_every_operation(&operations).await {
        assert_eq!(report, CONNECT_FAILURE, "{operation}");
    }
}

#[tokio::test]
async fn test_http_error_without_body_renders_empty_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    assert_eq!(operations.list_projects().await.unwrap(), "Error: HTTP 503\n");
}

#[tokio::test]
async fn test_decode_failure_is_not_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/refactor/inline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "changes": "not a list",
            "usagesInlined": 1
        })))
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    let err = operations.inline_element(inline_param(false)).await.unwrap_err();
    assert_eq!(err.kind, BridgeErrorKind::Decode);
}

#[tokio::test]
async fn test_router_returns_single_text_block() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "projects": [] })))
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    let result = ToolRouter::route_tool_call(&operations, tool_call("pycharm_list_projects", json!({})))
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["content"].as_array().unwrap().len(), 1);
    assert_eq!(text_of(&result), "No projects are currently open in PyCharm.");
}

#[tokio::test]
async fn test_router_find_usages_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/find/usages"))
        .and(body_partial_json(json!({ "project": "/project", "file": "src/main.py", "line": 10, "column": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "helper",
            "usages": [
                { "file": "fileB", "line": 5, "column": 1, "text": "helper()" },
                { "file": "fileA", "line": 2, "column": 1, "text": "helper()" },
                { "file": "fileB", "line": 1, "column": 1, "text": "helper()" }
            ],
            "totalCount": 3
        })))
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    let result = ToolRouter::route_tool_call(
        &operations,
        tool_call(
            "pycharm_find_usages",
            json!({ "project_path": "/project", "file_path": "src/main.py", "line": 10, "column": 5 }),
        ),
    )
    .await
    .unwrap();

    let text = text_of(&result);
    assert!(text.starts_with("Usages of 'helper': 3 found"));
    assert!(text.find("📄 fileB:").unwrap() < text.find("📄 fileA:").unwrap());
    assert!(text.find("fileB:1:1").unwrap() < text.find("fileB:5:1").unwrap());
}

#[tokio::test]
async fn test_router_rejects_unknown_tool() {
    let operations = RefactoringOperations::new(unreachable_config());
    let result =
        ToolRouter::route_tool_call(&operations, tool_call("pycharm_reformat", json!({}))).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_router_rejects_missing_parameters() {
    let operations = RefactoringOperations::new(unreachable_config());
    let result = ToolRouter::route_tool_call(
        &operations,
        tool_call("pycharm_rename_symbol", json!({ "project_path": "/project" })),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_router_rejects_zero_based_positions() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    let result = ToolRouter::route_tool_call(
        &operations,
        tool_call(
            "pycharm_inline_element",
            json!({ "project_path": "/project", "file_path": "a.py", "line": 0, "column": 4 }),
        ),
    )
    .await;
    assert!(result.is_err());
    server.verify().await;
}

#[tokio::test]
async fn test_router_surfaces_decode_failure_as_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let operations = RefactoringOperations::new(config_for(&server));
    let result =
        ToolRouter::route_tool_call(&operations, tool_call("pycharm_bridge_status", json!({})))
            .await;
    let err = result.unwrap_err();
    assert_eq!(err.data, Some(json!({ "kind": "decode" })));
}
