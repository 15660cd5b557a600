//! Language-model gateway
//!
//! Turns a prompt into response text through one `ContentGenerator` call.
//! Failures never propagate: they are logged once and replaced by a fixed
//! fallback, surfaced to callers as `Outcome::Fallback`.

mod outcome;
pub mod prompts;

pub use outcome::Outcome;

use crate::llm::{ContentGenerator, GenAiClient, GenerateContentRequest};
use crate::models::ProjectIdea;
use crate::{FolioError, Result};
use std::sync::Arc;
use tracing::{debug, error};

use prompts::{
    idea_fallback, idea_prompt, system_instruction, CHAT_FALLBACK, CHAT_TEMPERATURE,
    CONTACT_DRAFT_PROMPT, IDEA_RESPONSE_MIME_TYPE,
};

/// Stateless boundary between the views and the generative service
#[derive(Clone)]
pub struct PortfolioGateway {
    generator: Arc<dyn ContentGenerator>,
    chat_temperature: f32,
}

impl PortfolioGateway {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            generator,
            chat_temperature: CHAT_TEMPERATURE,
        }
    }

    pub fn from_client(client: GenAiClient) -> Self {
        Self::new(Arc::new(client))
    }

    pub fn with_chat_temperature(mut self, temperature: f32) -> Self {
        self.chat_temperature = temperature;
        self
    }

    /// Chat reply framed by the portfolio persona; `context` is appended to the system instruction.
    pub async fn chat_reply(&self, prompt: &str, context: Option<&str>) -> Outcome<String> {
        match self.request_chat(prompt, context.unwrap_or_default()).await {
            Ok(text) => Outcome::Live(text),
            Err(cause) => {
                error!(target: "gateway", error = %cause, "chat reply failed; using fallback");
                Outcome::Fallback {
                    value: CHAT_FALLBACK.to_string(),
                    cause,
                }
            }
        }
    }

    /// Small project idea highlighting `tech_stack`, decoded from a JSON reply.
    pub async fn generate_idea<S: AsRef<str>>(&self, tech_stack: &[S]) -> Outcome<ProjectIdea> {
        match self.request_idea(tech_stack).await {
            Ok(idea) => Outcome::Live(idea),
            Err(cause) => {
                error!(target: "gateway", error = %cause, "project idea failed; using fallback");
                Outcome::Fallback {
                    value: idea_fallback(),
                    cause,
                }
            }
        }
    }

    /// Suggested opening message for the contact form
    pub async fn draft_contact_message(&self) -> Outcome<String> {
        self.chat_reply(CONTACT_DRAFT_PROMPT, None).await
    }

    async fn request_chat(&self, prompt: &str, context: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(FolioError::InvalidInput("prompt is empty".into()));
        }
        let request = GenerateContentRequest::from_prompt(prompt)
            .with_system_instruction(system_instruction(context))
            .with_temperature(self.chat_temperature);

        let response = self.generator.generate_content(&request).await?;
        debug!(target: "gateway", chars = response.text.len(), "chat reply received");
        Ok(response.text)
    }

    async fn request_idea<S: AsRef<str>>(&self, tech_stack: &[S]) -> Result<ProjectIdea> {
        if tech_stack.is_empty() {
            return Err(FolioError::InvalidInput("tech stack is empty".into()));
        }
        let request = GenerateContentRequest::from_prompt(idea_prompt(tech_stack))
            .with_response_mime_type(IDEA_RESPONSE_MIME_TYPE);

        let response = self.generator.generate_content(&request).await?;
        let idea: ProjectIdea = serde_json::from_str(response.text.trim())?;
        debug!(target: "gateway", title = %idea.title, "project idea received");
        Ok(idea)
    }
}
