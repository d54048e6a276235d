// Typefully draft tools: create a draft, list recently scheduled drafts

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_boolean, json_schema_object, json_schema_string, json_schema_string_enum, Tool,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::sync::Arc;
use typefully_sdk::{ContentFilter, DraftRequest, TypefullyClient};

/// Relay an API payload as a pretty-printed text envelope.
fn relay_payload(payload: &serde_json::Value) -> Result<CallToolResult> {
    Ok(CallToolResult::text(serde_json::to_string_pretty(payload)?))
}

/// Relay a failed call as a normal-shaped envelope carrying the error text.
///
/// The invocation channel sees a successful tool call either way; the
/// diagnostic copy goes to stderr.
fn relay_error(tool: &str, error: &typefully_sdk::TypefullyError) -> CallToolResult {
    tracing::error!(tool = tool, error = %error, "tool call failed");
    CallToolResult::text(error.to_string())
}

/// Tool to create a draft on Typefully
pub struct CreateDraftTool {
    client: Arc<TypefullyClient>,
}

impl CreateDraftTool {
    pub const NAME: &'static str = "typefully_create_draft";

    pub fn new(client: Arc<TypefullyClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CreateDraftArgs {
    content: String,
    threadify: Option<bool>,
    share: Option<bool>,
    schedule_date: Option<String>,
    auto_retweet_enabled: Option<bool>,
    auto_plug_enabled: Option<bool>,
}

#[async_trait::async_trait]
impl Tool for CreateDraftTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Create a draft on Typefully given some plain-text content.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "content": json_schema_string(
                        "Content of the draft. Split into multiple tweets by adding 4 consecutive newlines between tweets or use threadify option."
                    ),
                    "threadify": json_schema_boolean(
                        "If true, content will be automatically split into multiple tweets."
                    ),
                    "share": json_schema_boolean(
                        "If true, returned payload will include a share_url."
                    ),
                    "schedule_date": json_schema_string(
                        "Schedule date for the draft. Can be an ISO formatted date (e.g.: 2022-06-13T11:13:31.662Z) or 'next-free-slot'."
                    ),
                    "auto_retweet_enabled": json_schema_boolean(
                        "If true, the post will have an AutoRT enabled, according to the one set on Typefully for the account."
                    ),
                    "auto_plug_enabled": json_schema_boolean(
                        "If true, the post will have an AutoPlug enabled, according to the one set on Typefully for the account."
                    )
                }),
                vec!["content"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: CreateDraftArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for typefully_create_draft")?;

        let request = DraftRequest {
            content: args.content,
            threadify: args.threadify,
            share: args.share,
            schedule_date: args.schedule_date,
            auto_retweet_enabled: args.auto_retweet_enabled,
            auto_plug_enabled: args.auto_plug_enabled,
        };

        match self.client.create_draft(&request).await {
            Ok(payload) => relay_payload(&payload),
            Err(e) => Ok(relay_error(Self::NAME, &e)),
        }
    }
}

/// Tool to list the most recently scheduled drafts
pub struct RecentlyScheduledTool {
    client: Arc<TypefullyClient>,
}

impl RecentlyScheduledTool {
    pub const NAME: &'static str = "typefully_recently_scheduled_drafts";

    pub fn new(client: Arc<TypefullyClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RecentlyScheduledArgs {
    content_filter: Option<ContentFilter>,
}

#[async_trait::async_trait]
impl Tool for RecentlyScheduledTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Get a list of all the most recently scheduled drafts in Typefully"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "content_filter": json_schema_string_enum(
                        &["threads", "tweets"],
                        "Filters the list of drafts to only include tweets or threads"
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: RecentlyScheduledArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for typefully_recently_scheduled_drafts")?;

        match self.client.recently_scheduled(args.content_filter).await {
            Ok(payload) => relay_payload(&payload),
            Err(e) => Ok(relay_error(Self::NAME, &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Arc<TypefullyClient> {
        Arc::new(
            TypefullyClient::builder()
                .base_url(server.uri())
                .api_key("sk-test-key")
                .build()
                .unwrap(),
        )
    }

    fn envelope_text(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        let ToolContent::Text { text } = &result.content[0];
        text
    }

    #[tokio::test]
    async fn test_create_draft_envelope_round_trips_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/drafts/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "abc"})),
            )
            .mount(&server)
            .await;

        let tool = CreateDraftTool::new(client_for(&server));
        let result = tool
            .execute(serde_json::json!({"content": "hello"}))
            .await
            .unwrap();

        let text = envelope_text(&result);
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, serde_json::json!({"id": "abc"}));
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_create_draft_error_envelope_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/drafts/"))
            .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"detail":"bad"}"#))
            .mount(&server)
            .await;

        let tool = CreateDraftTool::new(client_for(&server));
        let result = tool
            .execute(serde_json::json!({"content": "hello"}))
            .await
            .unwrap();

        let text = envelope_text(&result);
        assert!(text.contains("422"));
        assert!(text.contains("bad"));
        // Indistinguishable from success at the protocol level.
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_missing_api_key_reports_credential_without_network() {
        let server = MockServer::start().await;

        let client = Arc::new(
            TypefullyClient::builder()
                .base_url(server.uri())
                .build()
                .unwrap(),
        );

        let create = CreateDraftTool::new(client.clone());
        let result = create
            .execute(serde_json::json!({"content": "hello"}))
            .await
            .unwrap();
        assert!(envelope_text(&result).contains("TYPEFULLY_API_KEY"));

        let list = RecentlyScheduledTool::new(client);
        let result = list.execute(serde_json::json!({})).await.unwrap();
        assert!(envelope_text(&result).contains("TYPEFULLY_API_KEY"));

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recently_scheduled_forwards_filter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/drafts/recently-scheduled/"))
            .and(query_param("content_filter", "threads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let tool = RecentlyScheduledTool::new(client_for(&server));
        let result = tool
            .execute(serde_json::json!({"content_filter": "threads"}))
            .await
            .unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(envelope_text(&result)).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_rejected() {
        let server = MockServer::start().await;

        let tool = CreateDraftTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({})).await;

        assert!(result.is_err());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_interleaved_calls_do_not_cross_contaminate() {
        let create_server = MockServer::start().await;
        let list_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/drafts/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"op": "create"})),
            )
            .mount(&create_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/drafts/recently-scheduled/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"op": "list"})),
            )
            .mount(&list_server)
            .await;

        let create = Arc::new(CreateDraftTool::new(client_for(&create_server)));
        let list = Arc::new(RecentlyScheduledTool::new(client_for(&list_server)));

        let mut handles = Vec::new();
        for i in 0..10 {
            if i % 2 == 0 {
                let tool = create.clone();
                handles.push(tokio::spawn(async move {
                    tool.execute(serde_json::json!({"content": "hello"}))
                        .await
                        .unwrap()
                }));
            } else {
                let tool = list.clone();
                handles.push(tokio::spawn(async move {
                    tool.execute(serde_json::json!({})).await.unwrap()
                }));
            }
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.unwrap();
            let parsed: serde_json::Value =
                serde_json::from_str(envelope_text(&result)).unwrap();
            let expected = if i % 2 == 0 { "create" } else { "list" };
            assert_eq!(parsed["op"], expected);
        }
    }
}
