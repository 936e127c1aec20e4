//! Industry classification — trait seam plus the production LLM-backed
//! implementation.
//!
//! The trait exists so the debounce controller is testable against a scripted
//! classifier; only `LlmIndustryClassifier` talks to the model, and it does so
//! through `llm_client` like everything else.

use async_trait::async_trait;
use serde::Deserialize;

use crate::briefing::prompts::SUGGEST_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

/// Classifies a free-text company description into an industry name.
///
/// Implementations return the raw classifier output; membership in the active
/// enumerated list is the caller's responsibility.
#[async_trait]
pub trait IndustryClassifier: Send + Sync {
    async fn classify(&self, company_description: &str) -> Result<String, AppError>;
}

#[derive(Debug, Deserialize)]
struct IndustrySuggestion {
    industry: String,
}

/// LLM-backed classifier. The candidate list is interpolated into the prompt
/// so the model picks from the closed set, but the output is still validated
/// by the caller — the model is not trusted to stay on the list.
pub struct LlmIndustryClassifier {
    llm: LlmClient,
    industries: &'static [&'static str],
}

impl LlmIndustryClassifier {
    pub fn new(llm: LlmClient, industries: &'static [&'static str]) -> Self {
        Self { llm, industries }
    }
}

#[async_trait]
impl IndustryClassifier for LlmIndustryClassifier {
    async fn classify(&self, company_description: &str) -> Result<String, AppError> {
        let options = self
            .industries
            .iter()
            .map(|i| format!("- {i}"))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = SUGGEST_PROMPT_TEMPLATE
            .replace("{company_description}", company_description)
            .replace("{industry_options}", &options);

        let suggestion: IndustrySuggestion = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Industry classification failed: {e}")))?;

        Ok(suggestion.industry)
    }
}
