//! # Tool Router Module
//!
//! Routes MCP tool calls to the matching refactoring operation and wraps the
//! rendered report in a single text content block.

use crate::operations::RefactoringOperations;
use crate::tools::*;
use crate::types::*;

use rmcp::model::{CallToolRequestParam, CallToolResult, Content, ErrorData};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Routes tool calls to refactoring operations
pub struct ToolRouter;

impl ToolRouter {
    /// Helper function to parse request parameters
    fn parse_params<T: DeserializeOwned>(request: &CallToolRequestParam) -> Result<T, ErrorData> {
        serde_json::from_value(serde_json::Value::Object(
            request.arguments.clone().unwrap_or_default(),
        ))
        .map_err(|e| ErrorData::invalid_params(Cow::Owned(e.to_string()), None))
    }

    fn text_response(report: String) -> CallToolResult {
        CallToolResult::success(vec![Content::text(report)])
    }

    /// Route a tool call to the appropriate operation
    pub async fn route_tool_call(
        operations: &RefactoringOperations,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let report = match request.name.as_ref() {
            LIST_PROJECTS => operations.list_projects().await,
            BRIDGE_STATUS => operations.bridge_status().await,
            RENAME_SYMBOL => {
                let param: RenameSymbolParam = Self::parse_params(&request)?;
                Self::check_position(param.line, param.column)?;
                operations.rename_symbol(param).await
            }
            MOVE_ELEMENT => {
                let param: MoveElementParam = Self::parse_params(&request)?;
                Self::check_position(param.line, param.column)?;
                operations.move_element(param).await
            }
            EXTRACT_METHOD => {
                let param: ExtractMethodParam = Self::parse_params(&request)?;
                Self::check_position(param.start_line, param.start_column)?;
                Self::check_position(param.end_line, param.end_column)?;
                operations.extract_method(param).await
            }
            EXTRACT_VARIABLE => {
                let param: ExtractVariableParam = Self::parse_params(&request)?;
                Self::check_position(param.start_line, param.start_column)?;
                Self::check_position(param.end_line, param.end_column)?;
                operations.extract_variable(param).await
            }
            INLINE_ELEMENT => {
                let param: InlineElementParam = Self::parse_params(&request)?;
                Self::check_position(param.line, param.column)?;
                operations.inline_element(param).await
            }
            CHANGE_SIGNATURE => {
                let param: ChangeSignatureParam = Self::parse_params(&request)?;
                Self::check_position(param.line, param.column)?;
                operations.change_signature(param).await
            }
            SAFE_DELETE => {
                let param: SafeDeleteParam = Self::parse_params(&request)?;
                Self::check_position(param.line, param.column)?;
                operations.safe_delete(param).await
            }
            FIND_USAGES => {
                let param: FindUsagesParam = Self::parse_params(&request)?;
                Self::check_position(param.line, param.column)?;
                operations.find_usages(param).await
            }
            _ => {
                return Err(ErrorData::method_not_found::<
                    rmcp::model::CallToolRequestMethod,
                >());
            }
        };

        report.map(Self::text_response).map_err(ErrorData::from)
    }

    /// Positions are 1-indexed; a zero almost always means the caller used
    /// 0-indexed coordinates.
    fn check_position(line: u32, column: u32) -> Result<(), ErrorData> {
        if line == 0 || column == 0 {
            return Err(ErrorData::invalid_params(
                Cow::Owned(format!(
                    "Positions are 1-indexed, got line {line}, column {column}"
                )),
                None,
            ));
        }
        Ok(())
    }
}
