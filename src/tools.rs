use rmcp::model::{JsonObject, ListToolsResult, Tool};
use serde_json::{Value, json};
use std::sync::Arc;

pub const LIST_PROJECTS: &str = "pycharm_list_projects";
pub const BRIDGE_STATUS: &str = "pycharm_bridge_status";
pub const RENAME_SYMBOL: &str = "pycharm_rename_symbol";
pub const MOVE_ELEMENT: &str = "pycharm_move_element";
pub const EXTRACT_METHOD: &str = "pycharm_extract_method";
pub const EXTRACT_VARIABLE: &str = "pycharm_extract_variable";
pub const INLINE_ELEMENT: &str = "pycharm_inline_element";
pub const CHANGE_SIGNATURE: &str = "pycharm_change_signature";
pub const SAFE_DELETE: &str = "pycharm_safe_delete";
pub const FIND_USAGES: &str = "pycharm_find_usages";

fn object_schema(value: Value) -> Arc<JsonObject> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Properties shared by every tool that targets a single symbol position
fn position_properties() -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert(
        "project_path".into(),
        json!({ "type": "string", "description": "Absolute path to the project (use pycharm_list_projects to find available projects)" }),
    );
    properties.insert(
        "file_path".into(),
        json!({ "type": "string", "description": "Path to the file (relative to the project or absolute)" }),
    );
    properties.insert(
        "line".into(),
        json!({ "type": "integer", "minimum": 1, "description": "Line number (1-indexed)" }),
    );
    properties.insert(
        "column".into(),
        json!({ "type": "integer", "minimum": 1, "description": "Column number (1-indexed)" }),
    );
    properties
}

/// Properties shared by the extract tools, which target a selection
fn selection_properties() -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert(
        "project_path".into(),
        json!({ "type": "string", "description": "Absolute path to the project" }),
    );
    properties.insert(
        "file_path".into(),
        json!({ "type": "string", "description": "Path to the file containing the selection" }),
    );
    properties.insert(
        "start_line".into(),
        json!({ "type": "integer", "minimum": 1, "description": "Starting line of the selection (1-indexed)" }),
    );
    properties.insert(
        "start_column".into(),
        json!({ "type": "integer", "minimum": 1, "description": "Starting column of the selection (1-indexed)" }),
    );
    properties.insert(
        "end_line".into(),
        json!({ "type": "integer", "minimum": 1, "description": "Ending line of the selection (1-indexed)" }),
    );
    properties.insert(
        "end_column".into(),
        json!({ "type": "integer", "minimum": 1, "description": "Ending column of the selection (1-indexed)" }),
    );
    properties
}

fn preview_property() -> Value {
    json!({ "type": "boolean", "default": false, "description": "If true, show what would change without applying it" })
}

fn with_extra(mut properties: JsonObject, extra: Value, required: &[&str]) -> Value {
    if let Value::Object(extra) = extra {
        properties.extend(extra);
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

const POSITION_REQUIRED: [&str; 4] = ["project_path", "file_path", "line", "column"];
const SELECTION_REQUIRED: [&str; 6] = [
    "project_path",
    "file_path",
    "start_line",
    "start_column",
    "end_line",
    "end_column",
];

pub struct ToolService;

impl ToolService {
    pub fn list_tools() -> ListToolsResult {
        ListToolsResult {
            tools: vec![
                Tool::new(
                    LIST_PROJECTS,
                    "List all projects currently open in PyCharm. Use this to find the project path before any refactoring.",
                    object_schema(json!({ "type": "object", "properties": {} })),
                ),
                Tool::new(
                    BRIDGE_STATUS,
                    "Check that PyCharm is reachable and report the bridge version and number of open projects.",
                    object_schema(json!({ "type": "object", "properties": {} })),
                ),
                Tool::new(
                    RENAME_SYMBOL,
                    "Rename a symbol (variable, function, class, etc.) across the entire project using PyCharm's semantic rename.",
                    object_schema(with_extra(
                        position_properties(),
                        json!({
                            "new_name": { "type": "string", "description": "The new name for the symbol" },
                            "search_in_comments": { "type": "boolean", "default": true, "description": "Also rename occurrences in comments" },
                            "search_in_strings": { "type": "boolean", "default": false, "description": "Also rename occurrences in string literals" },
                            "preview": preview_property(),
                        }),
                        &["project_path", "file_path", "line", "column", "new_name"],
                    )),
                ),
                Tool::new(
                    MOVE_ELEMENT,
                    "Move a class, function, or variable to a different module. Imports are updated across the project.",
                    object_schema(with_extra(
                        position_properties(),
                        json!({
                            "target_file": { "type": "string", "description": "Path to the destination file" },
                            "preview": preview_property(),
                        }),
                        &["project_path", "file_path", "line", "column", "target_file"],
                    )),
                ),
                Tool::new(
                    EXTRACT_METHOD,
                    "Extract the selected code into a new method. Parameters and return value are inferred by PyCharm.",
                    object_schema(with_extra(
                        selection_properties(),
                        json!({
                            "method_name": { "type": "string", "description": "Name for the new method" },
                            "preview": preview_property(),
                        }),
                        &[&SELECTION_REQUIRED[..], &["method_name"][..]].concat(),
                    )),
                ),
                Tool::new(
                    EXTRACT_VARIABLE,
                    "Extract the selected expression into a variable, optionally replacing identical occurrences.",
                    object_schema(with_extra(
                        selection_properties(),
                        json!({
                            "variable_name": { "type": "string", "description": "Name for the new variable" },
                            "replace_all": { "type": "boolean", "default": true, "description": "Replace all identical occurrences" },
                            "preview": preview_property(),
                        }),
                        &[&SELECTION_REQUIRED[..], &["variable_name"][..]].concat(),
                    )),
                ),
                Tool::new(
                    INLINE_ELEMENT,
                    "Inline a variable or method, replacing each usage with its definition.",
                    object_schema(with_extra(
                        position_properties(),
                        json!({ "preview": preview_property() }),
                        &POSITION_REQUIRED,
                    )),
                ),
                Tool::new(
                    CHANGE_SIGNATURE,
                    "Change a function's name, parameters, or return type. All call sites are updated.",
                    object_schema(with_extra(
                        position_properties(),
                        json!({
                            "new_name": { "type": "string", "description": "New name for the function" },
                            "parameters": {
                                "type": "array",
                                "description": "New parameter list",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "name": { "type": "string" },
                                        "type": { "type": "string" },
                                        "defaultValue": { "type": "string" }
                                    },
                                    "required": ["name"]
                                }
                            },
                            "return_type": { "type": "string", "description": "New return type annotation" },
                            "preview": preview_property(),
                        }),
                        &POSITION_REQUIRED,
                    )),
                ),
                Tool::new(
                    SAFE_DELETE,
                    "Delete an element only if it has no usages. If usages are found the delete is aborted and they are reported.",
                    object_schema(with_extra(
                        position_properties(),
                        json!({
                            "search_for_usages": { "type": "boolean", "default": true, "description": "Check for usages before deleting" },
                        }),
                        &POSITION_REQUIRED,
                    )),
                ),
                Tool::new(
                    FIND_USAGES,
                    "Find all usages of a symbol across the project, grouped by file.",
                    object_schema(with_extra(position_properties(), json!({}), &POSITION_REQUIRED)),
                ),
            ],
            ..Default::default()
        }
    }
}
