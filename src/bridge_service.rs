use crate::config::BridgeConfig;
use crate::operations::RefactoringOperations;
use crate::tool_router::ToolRouter;
use crate::tools::ToolService;

use rmcp::{
    ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ErrorData, Implementation, InitializeResult,
        ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities,
    },
    service::{RequestContext, RoleServer},
};

/// MCP server exposing PyCharm refactorings. Holds only configuration; every
/// tool call opens and releases its own bridge client.
#[derive(Debug, Clone, Default)]
pub struct BridgeService {
    operations: RefactoringOperations,
}

impl BridgeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        Self {
            operations: RefactoringOperations::new(config),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        self.operations.config()
    }

    pub fn operations(&self) -> &RefactoringOperations {
        &self.operations
    }
}

impl ServerHandler for BridgeService {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::LATEST,
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some("This MCP server performs semantic refactorings (rename, move, extract, inline, change signature, safe delete, find usages) in a running PyCharm instance through the Refactoring Bridge plugin. Call pycharm_list_projects first to get the project path. All line and column numbers are 1-indexed. Use preview=true to see the effect of a refactoring without applying it.".into()),
        }
    }

    #[tracing::instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ToolService::list_tools())
    }

    #[tracing::instrument(skip(self, request, _context), fields(tool_name = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        ToolRouter::route_tool_call(&self.operations, request).await
    }
}
