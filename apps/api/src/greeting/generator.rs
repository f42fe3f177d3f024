//! Greeting generator — prompt → backend call → parsed variants.
//!
//! A backend reply that is not a JSON array of exactly three strings is not
//! an error: it is logged and replaced by the fallback triple so the caller
//! always gets something usable. Only backend failures propagate.

use tracing::{info, warn};

use crate::greeting::models::GreetingRequest;
use crate::greeting::prompts::build_prompt;
use crate::llm_client::{strip_json_fences, ChatBackend, ChatRequest, LlmError};

/// Returned when the backend reply cannot be read as three greetings.
pub const FALLBACK_VARIANTS: [&str; 3] = [
    "Не удалось сгенерировать поздравление в нужном формате.",
    "Попробуйте ещё раз позже.",
    "Либо обратитесь в поддержку.",
];

/// Result of reading the backend's text reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed([String; 3]),
    Malformed { raw: String, reason: String },
}

/// Parses backend output as a JSON array of exactly three strings.
pub fn parse_variants(raw: &str) -> ParseOutcome {
    match serde_json::from_str::<[String; 3]>(strip_json_fences(raw)) {
        Ok(variants) => ParseOutcome::Parsed(variants),
        Err(e) => ParseOutcome::Malformed {
            raw: raw.trim().to_string(),
            reason: e.to_string(),
        },
    }
}

pub fn fallback_variants() -> [String; 3] {
    FALLBACK_VARIANTS.map(String::from)
}

/// Runs the generation path for an already validated request.
pub async fn generate_variants(
    llm: &dyn ChatBackend,
    request: &GreetingRequest,
) -> Result<[String; 3], LlmError> {
    let prompt = build_prompt(request);
    let reply = llm.chat(&ChatRequest::user_prompt(prompt)).await?;

    match parse_variants(&reply) {
        ParseOutcome::Parsed(variants) => {
            info!("Generated greeting variants");
            Ok(variants)
        }
        ParseOutcome::Malformed { raw, reason } => {
            warn!("Malformed greeting output ({reason}), serving fallback. Raw output: {raw}");
            Ok(fallback_variants())
        }
    }
}
