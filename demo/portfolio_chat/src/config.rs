use std::fs;
use std::path::Path;

use folio_core::content::{DEFAULT_IDEA_STACK, DEVELOPER_CONTEXT};
use folio_core::gateway::prompts::CHAT_TEMPERATURE;
use folio_core::GenAiConfig;

/// High-level configuration for the portfolio chat demo
#[derive(Clone, Debug)]
pub struct PortfolioChatConfig {
    pub llm: LlmConfig,
    /// Background appended to the assistant's system instruction
    pub persona_context: String,
    /// Stack used by `/idea` when none is given
    pub idea_stack: Vec<String>,
}

/// Generative API settings
#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub request_timeout_ms: u64,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        // Env-driven defaults come from the client config
        let base = GenAiConfig::default();
        Self {
            base_url: base.base_url,
            model: base.model,
            api_key: base.api_key,
            request_timeout_ms: base.request_timeout_ms,
            temperature: CHAT_TEMPERATURE,
        }
    }
}

impl Default for PortfolioChatConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            persona_context: std::env::var("PORTFOLIO_PERSONA_CONTEXT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEVELOPER_CONTEXT.to_string()),
            idea_stack: DEFAULT_IDEA_STACK.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PortfolioChatConfig {
    /// Load configuration from a TOML file (path via PORTFOLIO_CHAT_CONFIG or ./portfolio_chat.toml),
    /// overlaying values onto env-driven defaults.
    pub fn load() -> Self {
        let path = std::env::var("PORTFOLIO_CHAT_CONFIG")
            .unwrap_or_else(|_| "portfolio_chat.toml".into());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(p: &Path) -> Self {
        let default = Self::default();
        if !p.exists() {
            tracing::info!(target: "portfolio_chat", path = %p.display(), "No TOML config found; using defaults/env");
            return default;
        }
        match fs::read_to_string(p) {
            Ok(s) => Self::overlay_str(&s, default),
            Err(e) => {
                tracing::warn!(target: "portfolio_chat", error = %e, "Failed to read TOML; using defaults");
                default
            }
        }
    }

    /// Parse `s` and apply it on top of `base`; a parse error keeps `base` unchanged.
    pub fn overlay_str(s: &str, base: Self) -> Self {
        match toml::from_str::<PortfolioChatToml>(s) {
            Ok(t) => t.overlay(base),
            Err(e) => {
                tracing::warn!(target: "portfolio_chat", error = %e, "Failed to parse TOML; using defaults");
                base
            }
        }
    }

    pub fn client_config(&self) -> GenAiConfig {
        GenAiConfig {
            base_url: self.llm.base_url.clone(),
            model: self.llm.model.clone(),
            api_key: self.llm.api_key.clone(),
            request_timeout_ms: self.llm.request_timeout_ms,
        }
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct PortfolioChatToml {
    pub persona_context: Option<String>,
    pub idea_stack: Option<Vec<String>>,
    pub llm: Option<LlmToml>,
}

impl PortfolioChatToml {
    fn overlay(self, mut base: PortfolioChatConfig) -> PortfolioChatConfig {
        if let Some(x) = self.persona_context {
            base.persona_context = x;
        }
        if let Some(x) = self.idea_stack {
            let stack: Vec<String> = x.into_iter().filter(|s| !s.trim().is_empty()).collect();
            if !stack.is_empty() {
                base.idea_stack = stack;
            }
        }
        if let Some(l) = self.llm {
            l.apply(&mut base.llm);
        }
        base
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct LlmToml {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub temperature: Option<f32>,
}

impl LlmToml {
    fn apply(self, l: &mut LlmConfig) {
        if let Some(x) = self.base_url {
            l.base_url = x;
        }
        if let Some(x) = self.model {
            l.model = x;
        }
        if let Some(x) = self.api_key {
            l.api_key = Some(x);
        }
        if let Some(x) = self.request_timeout_ms {
            l.request_timeout_ms = x;
        }
        if let Some(x) = self.temperature {
            l.temperature = x.clamp(0.0, 2.0);
        }
    }
}
