// Greeting generation: request schema, prompt building, canned and model-backed paths.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod canned;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod tone;
