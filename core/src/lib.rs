// Folio Core Library
// Portfolio companion: generative-language gateway and view state

pub mod contact;
pub mod content;
pub mod gateway;
pub mod llm;
pub mod models;
pub mod session;

// Export core types
pub use contact::{ContactForm, ContactReceipt};
pub use gateway::{Outcome, PortfolioGateway};
pub use llm::{ContentGenerator, GenAiClient, GenAiConfig};
pub use models::{ChatMessage, ProjectIdea, Role};
pub use session::ChatSession;

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error: status={status} body={body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
pub type Result<T> = std::result::Result<T, FolioError>;
