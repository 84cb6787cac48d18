//! Response envelopes.
//!
//! Turns a [`ToolResult`] into the `CallToolResult` returned to MCP clients.
//! Every response carries exactly one content block:
//!
//! - failure: a text block `Error: <message>` with `isError: true`
//! - success as text: pretty-printed JSON or a confirmation sentence
//! - success as resource: the JSON payload addressed by a `spotify:` URI

use rmcp::model::{CallToolResult, Content, ResourceContents};
use serde::Serialize;
use tracing::debug;
use url::form_urlencoded;

use super::error::{ToolError, ToolResult};

/// MIME type of resource payloads.
pub const JSON_MIME_TYPE: &str = "application/json";

/// URI scheme of resource identifiers.
pub const URI_SCHEME: &str = "spotify";

/// Render a failure. This is the only constructor that flags an error.
pub fn error_response(err: &ToolError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
}

/// Successful results leave `isError` unset.
fn success(content: Content) -> CallToolResult {
    let mut result = CallToolResult::success(vec![content]);
    result.is_error = None;
    result
}

/// Render a success value as indented JSON text.
pub fn json_response<T: Serialize>(result: ToolResult<T>) -> CallToolResult {
    match result.and_then(|value| to_json(&value, true)) {
        Ok(text) => success(Content::text(text)),
        Err(e) => error_response(&e),
    }
}

/// Render a success as a hand-written confirmation sentence.
pub fn message_response<T>(
    result: ToolResult<T>,
    message: impl FnOnce(T) -> String,
) -> CallToolResult {
    match result {
        Ok(value) => success(Content::text(message(value))),
        Err(e) => error_response(&e),
    }
}

/// Render a success value as a JSON resource block.
///
/// `uri` is only evaluated on success.
pub fn resource_response<T: Serialize>(
    result: ToolResult<T>,
    uri: impl FnOnce() -> String,
) -> CallToolResult {
    match result.and_then(|value| to_json(&value, false)) {
        Ok(text) => {
            let uri = uri();
            debug!("Returning resource {}", uri);
            success(Content::resource(json_resource(uri, text)))
        }
        Err(e) => error_response(&e),
    }
}

fn json_resource(uri: String, text: String) -> ResourceContents {
    let mut contents = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(JSON_MIME_TYPE.to_string());
    }
    contents
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> ToolResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(|e| ToolError::internal(format!("Could not serialize response: {e}")))
}

// ============================================================================
// Resource URIs
// ============================================================================

/// `spotify:<entity>:<id>`
pub fn entity_uri(entity: &str, id: &str) -> String {
    format!("{URI_SCHEME}:{entity}:{id}")
}

/// `spotify:<entity>:<action>?<query>` with form-encoded query values.
pub fn action_uri(entity: &str, action: &str, query: &[(&str, String)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();
    if query.is_empty() {
        format!("{URI_SCHEME}:{entity}:{action}")
    } else {
        format!("{URI_SCHEME}:{entity}:{action}?{query}")
    }
}

/// `spotify:<entity>:<action>?ids=a%2Cb%2Cc` for batch lookups.
pub fn batch_uri(entity: &str, action: &str, ids: &[String]) -> String {
    action_uri(entity, action, &[("ids", ids.join(","))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{resource_of, text_of};
    use serde_json::json;

    #[test]
    fn test_error_response_shape() {
        let result = error_response(&ToolError::validation("Album ID must not be empty"));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text_of(&result), "Error: Album ID must not be empty");
    }

    #[test]
    fn test_remote_error_response_keeps_prefix() {
        let result: CallToolResult =
            json_response::<()>(Err(ToolError::remote("get album", "timed out")));
        assert_eq!(text_of(&result), "Error: Failed to get album: timed out");
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_json_response_is_indented() {
        let result = json_response(Ok(json!({"id": "abc", "count": 2})));
        assert_eq!(result.is_error, None);
        assert_eq!(result.content.len(), 1);
        let text = text_of(&result);
        assert!(text.contains("\n  \"id\": \"abc\""));
        assert_eq!(serde_json::from_str::<serde_json::Value>(text).unwrap()["count"], 2);
    }

    #[test]
    fn test_message_response_uses_sentence() {
        let result = message_response(Ok(3usize), |n| format!("Saved {n}"));
        assert_eq!(text_of(&result), "Saved 3");
        assert_eq!(result.is_error, None);
    }

    #[test]
    fn test_resource_response_shape() {
        let value = json!({"name": "Abbey Road", "images": []});
        let result = resource_response(Ok(value.clone()), || entity_uri("album", "abc"));
        assert_eq!(result.is_error, None);
        assert_eq!(result.content.len(), 1);

        let (uri, mime_type, text) = resource_of(&result);
        assert_eq!(uri, "spotify:album:abc");
        assert_eq!(mime_type, Some(JSON_MIME_TYPE));
        assert_eq!(serde_json::from_str::<serde_json::Value>(text).unwrap(), value);
    }

    #[test]
    fn test_success_omits_error_flag_on_the_wire() {
        let result = message_response(Ok(50usize), |n| {
            format!("Successfully saved {n} track(s) to library")
        });
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(
            wire,
            json!({
                "content": [{
                    "type": "text",
                    "text": "Successfully saved 50 track(s) to library"
                }]
            })
        );
        assert!(wire.get("isError").is_none());

        let failure = serde_json::to_value(error_response(&ToolError::validation("x"))).unwrap();
        assert_eq!(failure["isError"], true);
    }

    #[test]
    fn test_internal_failure_has_no_remote_prefix() {
        let err = ToolError::internal("Could not serialize response: key must be a string");
        let result = error_response(&err);
        assert_eq!(
            text_of(&result),
            "Error: Internal error: Could not serialize response: key must be a string"
        );
    }

    #[test]
    fn test_unserializable_value_is_internal_error() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(vec![1u8], "not a string key");
        let result = json_response(Ok(map));
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Error: Internal error: Could not serialize response"));
    }

    #[test]
    fn test_resource_uri_not_built_on_error() {
        let result = resource_response::<()>(Err(ToolError::validation("nope")), || {
            panic!("uri built for an error")
        });
        assert_eq!(text_of(&result), "Error: nope");
    }

    #[test]
    fn test_batch_uri_percent_encodes_commas() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(batch_uri("album", "check", &ids), "spotify:album:check?ids=a%2Cb%2Cc");
    }

    #[test]
    fn test_action_uri_without_query() {
        assert_eq!(action_uri("library", "tracks", &[]), "spotify:library:tracks");
        assert_eq!(
            action_uri("library", "tracks", &[("limit", "20".into()), ("offset", "0".into())]),
            "spotify:library:tracks?limit=20&offset=0"
        );
    }

    #[test]
    fn test_action_uri_encodes_reserved_characters() {
        assert_eq!(
            action_uri("playlist", "items", &[("id", "a b&c=d".into())]),
            "spotify:playlist:items?id=a+b%26c%3Dd"
        );
    }
}
