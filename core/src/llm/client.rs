use crate::{FolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::generator::ContentGenerator;
use super::request::GenerateContentRequest;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Configuration for GenAiClient loaded from environment variables
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    pub base_url: String, // e.g., https://generativelanguage.googleapis.com/v1beta
    pub model: String,    // e.g., gemini-3-flash-preview
    pub api_key: Option<String>,
    pub request_timeout_ms: u64,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("GEMINI_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("GEMINI_MODEL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|s| !s.is_empty())
                .or_else(|| std::env::var("API_KEY").ok().filter(|s| !s.is_empty())),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30_000),
        }
    }
}

/// Response text plus whatever metadata the service reported
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerateContentResponse {
    pub text: String,
    pub model_version: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<serde_json::Value>,
    pub raw: Option<serde_json::Value>,
}

impl GenerateContentResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// HTTP client for the hosted generate-content API.
///
/// Built once at startup and shared with the gateway; holds no per-request state.
#[derive(Clone)]
pub struct GenAiClient {
    http: Client,
    cfg: GenAiConfig,
}

impl GenAiClient {
    pub fn new(cfg: GenAiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()
            .map_err(|e| FolioError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, cfg })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GenAiConfig::default())
    }

    pub fn config(&self) -> &GenAiConfig {
        &self.cfg
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.model
        )
    }

    /// Issue exactly one generate-content call.
    /// Contract:
    /// - Input: request body (model comes from config)
    /// - Output: response with the first candidate's text
    /// - Error: missing key, network, non-2xx status, or a payload without text
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .ok_or_else(|| FolioError::Config("GEMINI_API_KEY is not set".into()))?;

        let url = self.endpoint();
        debug!(target: "genai_client", model = %self.cfg.model, "POST {}", url);

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| FolioError::Transport(format!("generateContent HTTP error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            debug!(target: "genai_client", %status, body = %body, "generateContent returned an error status");
            return Err(FolioError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let val: serde_json::Value = resp.json().await.map_err(|e| {
            FolioError::MalformedResponse(format!("Failed to parse generateContent JSON: {e}"))
        })?;
        let text = extract_text(&val).ok_or_else(|| {
            let reason = block_reason(&val)
                .map(|r| format!("prompt blocked: {r}"))
                .unwrap_or_else(|| "missing candidates[0].content.parts[].text".to_string());
            FolioError::MalformedResponse(reason)
        })?;

        Ok(GenerateContentResponse {
            text,
            model_version: val
                .get("modelVersion")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            finish_reason: val
                .get("candidates")
                .and_then(|c| c.get(0))
                .and_then(|c| c.get("finishReason"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            usage: val.get("usageMetadata").cloned(),
            raw: Some(val),
        })
    }
}

#[async_trait]
impl ContentGenerator for GenAiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        GenAiClient::generate_content(self, request).await
    }
}

/// Joins the text parts of the first candidate; `None` when there are none.
fn extract_text(v: &serde_json::Value) -> Option<String> {
    let parts = v
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let mut acc = String::new();
    let mut found = false;
    for part in parts {
        // Skip thought summaries; they are not part of the answer
        if part.get("thought").and_then(|t| t.as_bool()) == Some(true) {
            continue;
        }
        if let Some(t) = part.get("text").and_then(|t| t.as_str()) {
            acc.push_str(t);
            found = true;
        }
    }
    found.then_some(acc)
}

fn block_reason(v: &serde_json::Value) -> Option<&str> {
    v.get("promptFeedback")?.get("blockReason")?.as_str()
}
