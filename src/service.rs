use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        AnnotateAble, CallToolResult, Content, Implementation, ListResourceTemplatesResult,
        PaginatedRequestParam, ProtocolVersion, RawResourceTemplate, ReadResourceRequestParam,
        ReadResourceResult, ResourceContents, ResourceTemplate, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer,
};
use serde_json::json;

use crate::constants::{ECHO_URI_PREFIX, ECHO_URI_TEMPLATE};
use crate::gateway::AlertGateway;
use crate::models::GetAlertsRequest;

/// MCP surface of the gateway
#[derive(Clone)]
pub struct Weather {
    gateway: Arc<AlertGateway>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    pub fn new(gateway: Arc<AlertGateway>) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }

    /// Resource templates advertised through `resources/templates/list`
    fn resource_templates() -> Vec<ResourceTemplate> {
        vec![RawResourceTemplate {
            uri_template: ECHO_URI_TEMPLATE.to_string(),
            name: "echo".to_string(),
            title: None,
            description: Some("Echo a message as a resource".to_string()),
            mime_type: Some("text/plain".to_string()),
        }
        .no_annotation()]
    }

    /// Resolves an `echo://{message}` URI. The message is one non-empty path segment.
    pub(crate) fn read_echo(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        match uri.strip_prefix(ECHO_URI_PREFIX) {
            Some(message) if !message.is_empty() && !message.contains('/') => {
                tracing::info!("Reading echo resource: {}", uri);
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(self.gateway.echo(message), uri)],
                })
            }
            _ => Err(McpError::resource_not_found(
                "resource_not_found",
                Some(json!({ "uri": uri })),
            )),
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts from the National Weather Service API. \
                Call get_alerts with a two-letter US state code; read echo://{message} to echo text."
                    .to_string(),
            ),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Self::resource_templates(),
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_echo(&request.uri)
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter state code (e.g. CA, NY).")]
    pub(crate) async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let result = self.gateway.get_alerts(&request.state).await;

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }
}
