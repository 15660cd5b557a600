use crate::content::DEVELOPER_CONTEXT;
use crate::gateway::{Outcome, PortfolioGateway};
use crate::models::{ChatMessage, Role};

pub const GREETING: &str = "Hi! I'm the AI companion for this portfolio. Ask me anything about the developer's skills or philosophy!";

/// Append-only chat transcript for the About view's assistant
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    context: String,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// New session seeded with the assistant greeting and the default persona context
    pub fn new() -> Self {
        Self::with_context(DEVELOPER_CONTEXT)
    }

    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            context: context.into(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Send `input` and append both sides of the exchange.
    ///
    /// Blank input is ignored and returns `None`. A fallback reply is appended
    /// like any other assistant message.
    pub async fn send(
        &mut self,
        gateway: &PortfolioGateway,
        input: &str,
    ) -> Option<Outcome<String>> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(input));

        let reply = gateway.chat_reply(input, Some(self.context.as_str())).await;
        self.messages.push(ChatMessage::assistant(reply.value().clone()));
        Some(reply)
    }

    /// Plain-text transcript, one `Role: content` line per message
    pub fn render_transcript(&self) -> String {
        let mut out = String::new();
        for m in &self.messages {
            out.push_str(m.role.label());
            out.push_str(": ");
            out.push_str(&m.content);
            out.push('\n');
        }
        out
    }

    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}
