//! # Refactoring Operations
//!
//! One entry point per bridge operation. Each call owns a fresh
//! [`BridgeClient`], issues a single request, releases the client and
//! renders the outcome as text.
//!
//! Connectivity and application failures become `"Error: ..."` text.
//! Decode failures are returned as `Err`, since they indicate a protocol
//! mismatch with the bridge rather than a routine failure.

use crate::client::BridgeClient;
use crate::config::BridgeConfig;
use crate::errors::BridgeError;
use crate::response_formatter::ResponseFormatter;
use crate::types::*;

use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct RefactoringOperations {
    config: BridgeConfig,
}

impl RefactoringOperations {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn client(&self) -> BridgeClient {
        BridgeClient::new(self.config.clone())
    }

    pub async fn bridge_status(&self) -> Result<String, BridgeError> {
        let mut client = self.client();
        let result = client.health().await;
        client.close();
        render("bridge_status", result, |response| {
            ResponseFormatter::format_health(&response)
        })
    }

    pub async fn list_projects(&self) -> Result<String, BridgeError> {
        let mut client = self.client();
        let result = client.list_projects().await;
        client.close();
        render("list_projects", result, |response| {
            ResponseFormatter::format_projects(&response)
        })
    }

    pub async fn rename_symbol(&self, param: RenameSymbolParam) -> Result<String, BridgeError> {
        info!(
            "Renaming symbol at {}:{}:{} to '{}'",
            param.file_path, param.line, param.column, param.new_name
        );
        let mut client = self.client();
        let result = client.rename(&param.to_request()).await;
        client.close();
        render("rename_symbol", result, |response| {
            ResponseFormatter::format_rename(&response, &param.new_name, param.preview)
        })
    }

    pub async fn move_element(&self, param: MoveElementParam) -> Result<String, BridgeError> {
        info!(
            "Moving element at {}:{}:{} to '{}'",
            param.file_path, param.line, param.column, param.target_file
        );
        let mut client = self.client();
        let result = client.move_element(&param.to_request()).await;
        client.close();
        render("move_element", result, |response| {
            ResponseFormatter::format_move(&response, &param.target_file, param.preview)
        })
    }

    pub async fn extract_method(&self, param: ExtractMethodParam) -> Result<String, BridgeError> {
        let mut client = self.client();
        let result = client.extract_method(&param.to_request()).await;
        client.close();
        render("extract_method", result, |response| {
            ResponseFormatter::format_extract_method(&response, &param.method_name, param.preview)
        })
    }

    pub async fn extract_variable(
        &self,
        param: ExtractVariableParam,
    ) -> Result<String, BridgeError> {
        let mut client = self.client();
        let result = client.extract_variable(&param.to_request()).await;
        client.close();
        render("extract_variable", result, |response| {
            ResponseFormatter::format_extract_variable(
                &response,
                &param.variable_name,
                param.preview,
            )
        })
    }

    pub async fn inline_element(&self, param: InlineElementParam) -> Result<String, BridgeError> {
        let mut client = self.client();
        let result = client.inline(&param.to_request()).await;
        client.close();
        render("inline_element", result, |response| {
            ResponseFormatter::format_inline(&response, param.preview)
        })
    }

    pub async fn change_signature(
        &self,
        param: ChangeSignatureParam,
    ) -> Result<String, BridgeError> {
        let mut client = self.client();
        let result = client.change_signature(&param.to_request()).await;
        client.close();
        render("change_signature", result, |response| {
            ResponseFormatter::format_change_signature(&response, param.preview)
        })
    }

    pub async fn safe_delete(&self, param: SafeDeleteParam) -> Result<String, BridgeError> {
        info!(
            "Safe-deleting element at {}:{}:{}",
            param.file_path, param.line, param.column
        );
        let mut client = self.client();
        let result = client.safe_delete(&param.to_request()).await;
        client.close();
        render("safe_delete", result, |response| {
            ResponseFormatter::format_safe_delete(&response)
        })
    }

    pub async fn find_usages(&self, param: FindUsagesParam) -> Result<String, BridgeError> {
        let mut client = self.client();
        let result = client.find_usages(&param.to_request()).await;
        client.close();
        render("find_usages", result, |response| {
            ResponseFormatter::format_find_usages(&response)
        })
    }
}

/// Render a bridge outcome. Only decode failures escape as `Err`.
fn render<T, F>(
    operation: &str,
    result: Result<T, BridgeError>,
    format: F,
) -> Result<String, BridgeError>
where
    F: FnOnce(T) -> String,
{
    match result {
        Ok(response) => Ok(format(response)),
        Err(err) if err.is_decode() => {
            warn!("{operation}: bridge response did not match the expected schema: {err}");
            Err(err)
        }
        Err(err) => Ok(ResponseFormatter::format_error(&err)),
    }
}
