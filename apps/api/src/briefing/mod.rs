// Risk briefing flow: request validation, product recommendation rules,
// prompt assembly, and LLM generation.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod recommend;
pub mod schema;
