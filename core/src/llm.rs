//! LLM module root
//!
//! This file delegates to submodules in `llm/` and re-exports public types:
//! - `GenAiConfig`, `GenAiClient`, `GenerateContentResponse` for talking to the
//!   hosted generate-content API
//! - `GenerateContentRequest` and its payload parts
//! - `ContentGenerator`, the seam the gateway calls through

mod client;
mod generator;
mod request;

pub use client::{GenAiClient, GenAiConfig, GenerateContentResponse};
#[cfg(test)]
pub use generator::MockContentGenerator;
pub use generator::ContentGenerator;
pub use request::{Content, GenerateContentRequest, GenerationConfig, Part};
