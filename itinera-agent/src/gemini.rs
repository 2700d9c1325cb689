//! Gemini HTTP client implementation

use async_trait::async_trait;
use futures::stream;
use itinera_core::session::Session;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::base::{
    AgentError, AgentEvent, AgentEventStream, AgentResult, AgentRunner, Content, Part,
};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pinned low so the model sticks to the JSON response contract.
const TEMPERATURE: f64 = 0.001;

/// Gemini generateContent request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: WireContent,
    contents: Vec<WireContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<serde_json::Value>,
}

/// Gemini generateContent response format
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<WireContent>,
}

impl WireContent {
    fn from_content(content: &Content) -> Self {
        Self {
            role: Some(content.role.clone()),
            parts: content
                .parts
                .iter()
                .map(|p| WirePart {
                    text: p.text.clone(),
                    inline_data: p.inline_data.clone(),
                })
                .collect(),
        }
    }

    fn into_content(self) -> Content {
        Content {
            role: self.role.unwrap_or_else(|| "model".to_string()),
            parts: self
                .parts
                .into_iter()
                .map(|p| Part {
                    text: p.text,
                    inline_data: p.inline_data,
                })
                .collect(),
        }
    }
}

/// Client for the Gemini generateContent REST API
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: Option<String>,
    model: String,
    system_instruction: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(
        api_key: Option<String>,
        api_base: Option<String>,
        model: String,
        system_instruction: String,
    ) -> Self {
        let api_base = api_base
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            client: Client::new(),
            api_base,
            api_key,
            model,
            system_instruction,
        }
    }

    fn build_request(&self, session: &Session, message: &Content) -> GenerateContentRequest {
        // Session history roles are already "user"/"model", which is
        // exactly what the API expects.
        let mut contents: Vec<WireContent> = session
            .messages
            .iter()
            .map(|m| WireContent {
                role: Some(m.role.clone()),
                parts: vec![WirePart {
                    text: Some(m.text.clone()),
                    inline_data: None,
                }],
            })
            .collect();
        contents.push(WireContent::from_content(message));

        GenerateContentRequest {
            system_instruction: WireContent {
                role: None,
                parts: vec![WirePart {
                    text: Some(self.system_instruction.clone()),
                    inline_data: None,
                }],
            },
            contents,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        }
    }
}

#[async_trait]
impl AgentRunner for GeminiClient {
    async fn run(&self, session: &Session, message: Content) -> AgentResult<AgentEventStream> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AgentError::Config("Gemini API key is not set".to_string()))?;

        let request = self.build_request(session, &message);
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);

        debug!(
            "Sending generateContent request for session {} ({} contents)",
            session.id,
            request.contents.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AgentError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let data: GenerateContentResponse = response.json().await?;
        let content = data
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(WireContent::into_content);

        // One terminal event carrying the final payload; fakes may emit
        // longer sequences, the gateway keeps the last one with content.
        Ok(Box::pin(stream::iter(vec![Ok(AgentEvent { content })])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            Some("test-key".to_string()),
            Some(server.uri()),
            "gemini-2.5-pro".to_string(),
            "Answer with JSON.".to_string(),
        )
    }

    #[test]
    fn test_build_request_includes_history_and_new_message() {
        let client = GeminiClient::new(
            Some("k".to_string()),
            None,
            "gemini-2.5-pro".to_string(),
            "instruction".to_string(),
        );

        let mut session = Session::new("itinera", "traveler-1");
        session.add_message("user", "first question");
        session.add_message("model", "{\"viewType\":\"simple_response\"}");

        let request = client.build_request(&session, &Content::text("user", "second question"));

        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[1].role.as_deref(), Some("model"));
        assert_eq!(
            request.contents[2].parts[0].text.as_deref(),
            Some("second question")
        );
        assert_eq!(
            request.system_instruction.parts[0].text.as_deref(),
            Some("instruction")
        );
    }

    #[test]
    fn test_missing_api_key_fails_before_any_http() {
        let client = GeminiClient::new(
            None,
            None,
            "gemini-2.5-pro".to_string(),
            "instruction".to_string(),
        );
        let session = Session::new("itinera", "traveler-1");

        let result = futures::executor::block_on(client.run(&session, Content::text("user", "hi")));
        assert!(matches!(result, Err(AgentError::Config(_))));
    }

    #[tokio::test]
    async fn test_run_yields_terminal_event_with_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-pro:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(
                json!({"generationConfig": {"temperature": 0.001}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "{\"viewType\": \"budget_view\"}"}]
                    },
                    "finishReason": "STOP"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = Session::new("itinera", "traveler-1");
        let mut events = client
            .run(&session, Content::text("user", "how much?"))
            .await
            .unwrap();

        let event = events.next().await.unwrap().unwrap();
        assert_eq!(
            event.content.unwrap().first_text(),
            Some("{\"viewType\": \"budget_view\"}")
        );
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn test_http_error_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("key rejected"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = Session::new("itinera", "traveler-1");
        let err = match client.run(&session, Content::text("user", "hi")).await {
            Ok(_) => panic!("expected an error"),
            Err(err) => err,
        };

        match err {
            AgentError::Api(msg) => {
                assert!(msg.contains("403"));
                assert!(msg.contains("key rejected"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_yield_event_without_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = Session::new("itinera", "traveler-1");
        let mut events = client
            .run(&session, Content::text("user", "hi"))
            .await
            .unwrap();

        let event = events.next().await.unwrap().unwrap();
        assert!(event.content.is_none());
    }
}
