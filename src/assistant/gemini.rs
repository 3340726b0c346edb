//! Gemini client using the `generateContent` REST endpoint.
//!
//! One non-streaming request per reply: the prior transcript plus the new
//! user turn go out as `contents`, the fixed persona instruction rides along
//! as `systemInstruction`, and the reply text comes back in
//! `candidates[0].content.parts`. Sampling parameters are fixed.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::client::{ChatClient, ClientError, ReplyRequest};
use super::persona;
use super::types::{ChatMessage, Role};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// Fixed sampling parameters, sent with every request.
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 40;

// ============================================================================
// generateContent API Types
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Part {
    text: String,
}

/// A content block: a role-tagged turn in `contents`, or the role-less
/// system instruction.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn turn(role: Role, text: &str) -> Self {
        Self {
            role: Some(role),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn system(text: String) -> Self {
        Self {
            role: None,
            parts: vec![Part { text }],
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

/// The request body for `models/{model}:generateContent`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Builds the request body: prior turns in order, then the new user turn.
fn build_request(history: &[ChatMessage], message: &str) -> GenerateContentRequest {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|m| Content::turn(m.role, &m.text))
        .collect();
    contents.push(Content::turn(Role::User, message));

    GenerateContentRequest {
        contents,
        system_instruction: Content::system(persona::system_instruction()),
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
        },
    }
}

/// Pulls the reply text out of a response, verbatim.
///
/// Multiple parts are concatenated; a response with no candidates is a parse
/// error (content filters can produce these).
fn extract_text(response: GenerateContentResponse) -> Result<String, ClientError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::Parse("response contained no candidates".to_string()))?;

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    Ok(parts.into_iter().map(|p| p.text).collect())
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Gemini `generateContent` client.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// `base_url` override is for tests against a mock server; production
    /// uses [`DEFAULT_BASE_URL`].
    ///
    /// No request timeout is configured: a stalled endpoint stalls the
    /// typing indicator until the visitor closes the widget.
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn reply(&self, request: ReplyRequest<'_>) -> Result<String, ClientError> {
        let body = build_request(request.history, request.message);

        info!(
            "Gemini request: model={}, turns={}",
            request.model,
            body.contents.len()
        );

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, request.model
        );
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Gemini API error: {} - {}", status, err_body);
            return Err(ClientError::Api {
                status,
                message: err_body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let text = extract_text(parsed)?;
        debug!("Gemini reply: {} bytes", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_orders_history_before_new_message() {
        let history = vec![
            ChatMessage::user("Hi"),
            ChatMessage::model("Hello! Ask me about Lina's projects."),
        ];
        let body = build_request(&history, "Tell me about the smart home");

        assert_eq!(body.contents.len(), 3);
        assert_eq!(body.contents[0].role, Some(Role::User));
        assert_eq!(body.contents[1].role, Some(Role::Model));
        assert_eq!(body.contents[2].role, Some(Role::User));
        assert_eq!(body.contents[2].parts[0].text, "Tell me about the smart home");
    }

    #[test]
    fn test_build_request_attaches_persona_instruction() {
        let body = build_request(&[], "Skills?");
        assert!(body.system_instruction.role.is_none());
        let text = &body.system_instruction.parts[0].text;
        assert!(text.contains("personal AI assistant for Lina"));
        assert!(text.contains("\"book-system\""));
    }

    #[test]
    fn test_build_request_uses_fixed_sampling_parameters() {
        let body = build_request(&[], "anything");
        assert_eq!(body.generation_config.temperature, 0.7);
        assert_eq!(body.generation_config.top_p, 0.8);
        assert_eq!(body.generation_config.top_k, 40);
    }

    #[test]
    fn test_request_serializes_with_camel_case_keys() {
        let body = build_request(&[ChatMessage::user("Hi")], "Skills?");
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some(Role::Model),
                    parts: vec![
                        Part {
                            text: "Lina is skilled ".to_string(),
                        },
                        Part {
                            text: "in C++ and IoT.".to_string(),
                        },
                    ],
                }),
            }],
        };
        assert_eq!(
            extract_text(response).unwrap(),
            "Lina is skilled in C++ and IoT."
        );
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(matches!(
            extract_text(response),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn test_extract_text_tolerates_missing_content() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate { content: None }],
        };
        assert_eq!(extract_text(response).unwrap(), "");
    }
}
