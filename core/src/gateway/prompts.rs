//! Fixed prompt templates and fallback values

use crate::models::ProjectIdea;

pub const CHAT_TEMPERATURE: f32 = 0.7;

pub const IDEA_RESPONSE_MIME_TYPE: &str = "application/json";

pub const CHAT_FALLBACK: &str =
    "I'm having a little trouble connecting to my creative circuits. Please try again in a moment!";

pub const IDEA_FALLBACK_TITLE: &str = "Interactive Dashboard";
pub const IDEA_FALLBACK_DESCRIPTION: &str =
    "A clean dashboard concept focusing on CSS Grid and vanilla JS data manipulation.";

pub const CONTACT_DRAFT_PROMPT: &str = "Help me draft a professional message to a web developer I want to hire for a simple website project. Keep it under 50 words.";

pub fn idea_fallback() -> ProjectIdea {
    ProjectIdea {
        title: IDEA_FALLBACK_TITLE.to_string(),
        description: IDEA_FALLBACK_DESCRIPTION.to_string(),
    }
}

/// Persona framing sent as the system instruction on every chat request
pub fn system_instruction(context: &str) -> String {
    format!(
        "You are the AI assistant for a web developer's portfolio.\n\
         The developer is a new professional specializing in clean HTML, CSS, and JS.\n\
         Keep answers helpful, encouraging, and technically sound but accessible.\n\
         Context about the developer: {context}"
    )
}

pub fn idea_prompt<S: AsRef<str>>(tech_stack: &[S]) -> String {
    let stack = tech_stack
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Suggest a unique, small-scale web project idea that specifically highlights {stack}.\n\
         Provide a catchy title and a 2-sentence description of the goal. \
         Format as JSON with \"title\" and \"description\" keys."
    )
}
