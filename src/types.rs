//! # Bridge Wire Types
//!
//! Request and response bodies exchanged with the Refactoring Bridge.
//! Rust field names are snake_case; the wire uses camelCase aliases through
//! serde renames, so serialization and deserialization are symmetric.
//!
//! Response types reject unknown fields and fail on missing required fields.
//! `success` is the only field that silently defaults (to `true`), since the
//! bridge omits it on the happy path.
//!
//! All positions are 1-indexed, exactly as the editor shows them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

fn default_success() -> bool {
    true
}

fn default_status() -> String {
    "ok".to_string()
}

/// A request body bound to a POST endpoint of the bridge.
pub trait BridgeRequest: Serialize {
    /// Endpoint path relative to the bridge base URL
    const PATH: &'static str;
    /// Expected payload when the bridge reports success
    type Response: DeserializeOwned;
}

// Entities

/// One edit applied (or that would be applied) by a refactoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileChange {
    pub file: String,
    pub line: u32,
    pub old_text: String,
    pub new_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectInfo {
    pub name: String,
    pub path: String,
    pub is_open: bool,
    #[serde(default)]
    pub is_default: bool,
}

/// One reference to a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UsageInfo {
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// Source snippet around the usage, possibly multi-line
    pub text: String,
    #[serde(default)]
    pub is_write_access: bool,
}

/// One parameter of a new function signature. `None` fields are omitted
/// from the payload and mean "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: None,
            default_value: None,
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = Some(param_type.into());
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

/// Failure envelope. Parsed leniently: it only has to yield a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

// Responses

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HealthResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default = "default_status")]
    pub status: String,
    pub version: String,
    pub projects_open: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectListResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub projects: Vec<ProjectInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenameResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub changes: Vec<FileChange>,
    pub files_modified: u32,
    pub usages_updated: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub changes: Vec<FileChange>,
    pub files_modified: u32,
    pub imports_updated: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtractMethodResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub file: String,
    pub method_line: u32,
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtractVariableResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub file: String,
    pub variable_line: u32,
    pub occurrences_replaced: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InlineResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub changes: Vec<FileChange>,
    pub usages_inlined: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeSignatureResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub changes: Vec<FileChange>,
    pub call_sites_updated: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SafeDeleteResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub deleted: bool,
    #[serde(default)]
    pub usages_found: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usages: Option<Vec<UsageInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FindUsagesResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub symbol: String,
    pub usages: Vec<UsageInfo>,
    pub total_count: u32,
}

// Requests

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub project: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub new_name: String,
    pub search_in_comments: bool,
    pub search_in_strings: bool,
    pub preview: bool,
}

impl BridgeRequest for RenameRequest {
    const PATH: &'static str = "/refactor/rename";
    type Response = RenameResponse;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub project: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub target_file: String,
    pub preview: bool,
}

impl BridgeRequest for MoveRequest {
    const PATH: &'static str = "/refactor/move";
    type Response = MoveResponse;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractMethodRequest {
    pub project: String,
    pub file: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub method_name: String,
    pub preview: bool,
}

impl BridgeRequest for ExtractMethodRequest {
    const PATH: &'static str = "/refactor/extract-method";
    type Response = ExtractMethodResponse;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractVariableRequest {
    pub project: String,
    pub file: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub variable_name: String,
    pub replace_all: bool,
    pub preview: bool,
}

impl BridgeRequest for ExtractVariableRequest {
    const PATH: &'static str = "/refactor/extract-variable";
    type Response = ExtractVariableResponse;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineRequest {
    pub project: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub preview: bool,
}

impl BridgeRequest for InlineRequest {
    const PATH: &'static str = "/refactor/inline";
    type Response = InlineResponse;
}

/// Signature change. Every `None` field is left out of the JSON body
/// entirely, which the bridge reads as "keep as is".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSignatureRequest {
    pub project: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub preview: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

impl BridgeRequest for ChangeSignatureRequest {
    const PATH: &'static str = "/refactor/change-signature";
    type Response = ChangeSignatureResponse;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeDeleteRequest {
    pub project: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub search_for_usages: bool,
}

impl BridgeRequest for SafeDeleteRequest {
    const PATH: &'static str = "/refactor/safe-delete";
    type Response = SafeDeleteResponse;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindUsagesRequest {
    pub project: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl BridgeRequest for FindUsagesRequest {
    const PATH: &'static str = "/find/usages";
    type Response = FindUsagesResponse;
}

// Tool parameters, as received from the MCP client

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProjectsParam {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeStatusParam {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameSymbolParam {
    pub project_path: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    pub new_name: String,
    #[serde(default = "default_true")]
    pub search_in_comments: bool,
    #[serde(default)]
    pub search_in_strings: bool,
    #[serde(default)]
    pub preview: bool,
}

impl RenameSymbolParam {
    pub fn to_request(&self) -> RenameRequest {
        RenameRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            line: self.line,
            column: self.column,
            new_name: self.new_name.clone(),
            search_in_comments: self.search_in_comments,
            search_in_strings: self.search_in_strings,
            preview: self.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveElementParam {
    pub project_path: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    pub target_file: String,
    #[serde(default)]
    pub preview: bool,
}

impl MoveElementParam {
    pub fn to_request(&self) -> MoveRequest {
        MoveRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            line: self.line,
            column: self.column,
            target_file: self.target_file.clone(),
            preview: self.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractMethodParam {
    pub project_path: String,
    pub file_path: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub method_name: String,
    #[serde(default)]
    pub preview: bool,
}

impl ExtractMethodParam {
    pub fn to_request(&self) -> ExtractMethodRequest {
        ExtractMethodRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            start_line: self.start_line,
            start_column: self.start_column,
            end_line: self.end_line,
            end_column: self.end_column,
            method_name: self.method_name.clone(),
            preview: self.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractVariableParam {
    pub project_path: String,
    pub file_path: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub variable_name: String,
    #[serde(default = "default_true")]
    pub replace_all: bool,
    #[serde(default)]
    pub preview: bool,
}

impl ExtractVariableParam {
    pub fn to_request(&self) -> ExtractVariableRequest {
        ExtractVariableRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            start_line: self.start_line,
            start_column: self.start_column,
            end_line: self.end_line,
            end_column: self.end_column,
            variable_name: self.variable_name.clone(),
            replace_all: self.replace_all,
            preview: self.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineElementParam {
    pub project_path: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    #[serde(default)]
    pub preview: bool,
}

impl InlineElementParam {
    pub fn to_request(&self) -> InlineRequest {
        InlineRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            line: self.line,
            column: self.column,
            preview: self.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeSignatureParam {
    pub project_path: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    #[serde(default)]
    pub new_name: Option<String>,
    /// Full new parameter list; `None` keeps the current parameters
    #[serde(default)]
    pub parameters: Option<Vec<ParameterInfo>>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub preview: bool,
}

impl ChangeSignatureParam {
    pub fn to_request(&self) -> ChangeSignatureRequest {
        ChangeSignatureRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            line: self.line,
            column: self.column,
            preview: self.preview,
            new_name: self.new_name.clone(),
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeDeleteParam {
    pub project_path: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    #[serde(default = "default_true")]
    pub search_for_usages: bool,
}

impl SafeDeleteParam {
    pub fn to_request(&self) -> SafeDeleteRequest {
        SafeDeleteRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            line: self.line,
            column: self.column,
            search_for_usages: self.search_for_usages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindUsagesParam {
    pub project_path: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
}

impl FindUsagesParam {
    pub fn to_request(&self) -> FindUsagesRequest {
        FindUsagesRequest {
            project: self.project_path.clone(),
            file: self.file_path.clone(),
            line: self.line,
            column: self.column,
        }
    }
}
