//! Briefing generation — validates the request, derives the product
//! directive, assembles the prompt, and calls the LLM.
//!
//! Flow: validate → recommend() → build prompt → call_json → RiskBriefing.

use tracing::info;

use crate::briefing::prompts::{PROFILE_PROMPT_TEMPLATE, QUICK_PROMPT_TEMPLATE};
use crate::briefing::recommend::recommend;
use crate::briefing::schema::{
    BriefingRequest, BriefingVariant, ProfileBriefing, QuickBriefing, RiskBriefing,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{BETELSEC_PERSONA, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;

/// Generates a risk briefing for a validated request.
///
/// The briefing is created fresh per submission and never persisted. A
/// failed call maps to `AppError::Llm`, which the error layer surfaces as a
/// single generic retryable message.
pub async fn generate_briefing(
    llm: &LlmClient,
    request: &BriefingRequest,
) -> Result<RiskBriefing, AppError> {
    request.validate()?;

    let prompt = build_prompt(request);
    let system = briefing_system();

    info!(
        "Generating {:?} briefing for industry '{}'",
        request.variant, request.industry
    );

    let briefing = match request.variant {
        BriefingVariant::Profile => llm
            .call_json::<ProfileBriefing>(&prompt, &system)
            .await
            .map(RiskBriefing::Profile),
        BriefingVariant::Quick => llm
            .call_json::<QuickBriefing>(&prompt, &system)
            .await
            .map(RiskBriefing::Quick),
    }
    .map_err(|e| AppError::Llm(format!("Briefing generation failed: {e}")))?;

    Ok(briefing)
}

/// System prompt shared by both briefing variants.
fn briefing_system() -> String {
    format!("{BETELSEC_PERSONA} {JSON_ONLY_SYSTEM}")
}

/// Fills the variant's prompt template. The product directive is computed
/// here so the recommendation decision is made in code, not by the model.
///
/// Size-based rules are active only for variants that collect an enterprise
/// size. The quick form does not, so a stray size on a quick request is
/// ignored and the minimal recommendation branch applies.
fn build_prompt(request: &BriefingRequest) -> String {
    let rule_size = match request.variant {
        BriefingVariant::Profile => request.enterprise_size.as_deref().unwrap_or_default(),
        BriefingVariant::Quick => "",
    };
    let directive = recommend(rule_size);
    let directive_block = directive.prompt_block();

    match request.variant {
        BriefingVariant::Profile => PROFILE_PROMPT_TEMPLATE
            .replace("{company_name}", request.company_name.as_deref().unwrap_or(""))
            .replace("{industry}", &request.industry)
            .replace(
                "{enterprise_size}",
                request.enterprise_size.as_deref().unwrap_or(""),
            )
            .replace("{product_directive}", &directive_block),
        BriefingVariant::Quick => QUICK_PROMPT_TEMPLATE
            .replace("{industry}", &request.industry)
            .replace("{data_types}", request.data_types.as_deref().unwrap_or(""))
            .replace("{product_directive}", &directive_block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_profile_request() -> BriefingRequest {
        BriefingRequest {
            variant: BriefingVariant::Profile,
            company_name: Some("Helix Biologics".to_string()),
            industry: "Life Sciences & Pharmaceuticals".to_string(),
            enterprise_size: Some("small".to_string()),
            data_types: None,
        }
    }

    #[test]
    fn test_profile_prompt_interpolates_request_fields() {
        let prompt = build_prompt(&small_profile_request());
        assert!(prompt.contains("Helix Biologics"));
        assert!(prompt.contains("Life Sciences & Pharmaceuticals"));
        assert!(prompt.contains("'small'"));
        assert!(!prompt.contains("{company_name}"));
        assert!(!prompt.contains("{product_directive}"));
    }

    #[test]
    fn test_small_company_prompt_carries_full_product_set() {
        let prompt = build_prompt(&small_profile_request());
        assert!(prompt.contains("PRISM"));
        assert!(prompt.contains("SYNAPSE"));
        assert!(prompt.contains("DSG"));
    }

    #[test]
    fn test_large_company_prompt_carries_prism_and_deferral_only() {
        let mut request = small_profile_request();
        request.enterprise_size = Some("large".to_string());
        let prompt = build_prompt(&request);
        assert!(prompt.contains("PRISM"));
        assert!(!prompt.contains("SYNAPSE"));
        assert!(!prompt.contains("DSG"));
        assert!(prompt.contains("consultative"));
    }

    #[test]
    fn test_quick_prompt_takes_minimal_branch_without_size() {
        let request = BriefingRequest {
            variant: BriefingVariant::Quick,
            company_name: None,
            industry: "Healthcare".to_string(),
            enterprise_size: None,
            data_types: Some("Patient records and imaging archives".to_string()),
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Patient records"));
        assert!(prompt.contains("PRISM"));
        assert!(!prompt.contains("SYNAPSE"));
    }

    #[test]
    fn test_quick_prompt_ignores_stray_enterprise_size() {
        // Size-based rules only apply to variants that collect a size.
        let request = BriefingRequest {
            variant: BriefingVariant::Quick,
            company_name: None,
            industry: "Healthcare".to_string(),
            enterprise_size: Some("small".to_string()),
            data_types: Some("Patient records and imaging archives".to_string()),
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("PRISM"));
        assert!(!prompt.contains("SYNAPSE"));
        assert!(!prompt.contains("DSG"));
        assert!(prompt.contains("consultative"));
    }

    #[test]
    fn test_briefing_system_enforces_json_only() {
        let system = briefing_system();
        assert!(system.contains("BetelSec"));
        assert!(system.contains("valid JSON only"));
    }

    #[test]
    fn test_profile_briefing_parses_llm_shaped_json() {
        let json = r#"{
            "sensitiveData": "* Patient records\n* Clinical trial data",
            "threats": "Ransomware remains the dominant threat.",
            "productRecommendations": "* PRISM\n* SYNAPSE\n* DSG"
        }"#;
        let briefing: ProfileBriefing = serde_json::from_str(json).unwrap();
        assert!(briefing.sensitive_data.starts_with("* "));
    }

    #[test]
    fn test_quick_briefing_rejects_missing_section() {
        let json = r#"{"topThreats": "x", "productRecommendations": "y"}"#;
        assert!(serde_json::from_str::<QuickBriefing>(json).is_err());
    }
}
