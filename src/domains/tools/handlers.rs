//! Tool handler glue.
//!
//! A tool is a type implementing [`SpotifyTool`]: a name, some metadata, a
//! parameter type whose JSON schema is published to clients, and an async
//! `call` that runs the domain operation and renders its envelope. The
//! generic helpers below turn any such type into an rmcp route, a `Tool`
//! model, or an HTTP dispatch target.

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::core::spotify::SpotifyApi;

/// A Spotify capability exposed as an MCP tool.
#[async_trait]
pub trait SpotifyTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Short human-readable title.
    const TITLE: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Input parameters. Their schema gates calls before `call` runs.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Validate, call Spotify and render the response envelope.
    async fn call(client: &dyn SpotifyApi, params: Self::Params) -> CallToolResult;
}

/// Create a Tool model for `T` (metadata).
pub fn tool_model<T: SpotifyTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: Some(T::TITLE.into()),
    }
}

/// Decode raw arguments into `T::Params`.
///
/// Missing required fields and type mismatches are rejected here, before any
/// tool-specific validation.
pub fn parse_params<T: SpotifyTool>(arguments: JsonObject) -> Result<T::Params, String> {
    serde_json::from_value(serde_json::Value::Object(arguments)).map_err(|e| {
        warn!("Rejected arguments for {}: {}", T::NAME, e);
        format!("Invalid arguments for {}: {}", T::NAME, e)
    })
}

/// Create a ToolRoute for STDIO transport.
pub fn tool_route<T, S>(client: Arc<dyn SpotifyApi>) -> ToolRoute<S>
where
    T: SpotifyTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool_model::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let client = client.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            let params =
                parse_params::<T>(args).map_err(|e| McpError::invalid_params(e, None))?;
            Ok(T::call(client.as_ref(), params).await)
        }
        .boxed()
    })
}

/// Run `T` on raw JSON arguments (for HTTP transport).
pub async fn dispatch<T: SpotifyTool>(
    client: &dyn SpotifyApi,
    arguments: serde_json::Value,
) -> Result<CallToolResult, String> {
    let arguments = match arguments {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Null => JsonObject::new(),
        other => return Err(format!("Arguments must be an object, got {other}")),
    };
    let params = parse_params::<T>(arguments)?;
    Ok(T::call(client, params).await)
}
