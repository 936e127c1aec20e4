//! Axum route handler for the industry suggestion API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::briefing::schema::BriefingVariant;
use crate::errors::AppError;
use crate::state::AppState;
use crate::suggest::classifier::{IndustryClassifier, LlmIndustryClassifier};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestIndustryRequest {
    pub company_description: String,
    /// Selects the active enumerated list the suggestion is validated
    /// against. Defaults to the profile form's full list.
    #[serde(default)]
    pub variant: BriefingVariant,
}

#[derive(Debug, Serialize)]
pub struct SuggestIndustryResponse {
    /// `null` when classification failed or the result was off-list. The
    /// suggestion is a non-critical enhancement; callers treat `null` as
    /// "no suggestion" and move on.
    pub industry: Option<String>,
}

/// POST /api/v1/industry/suggest
pub async fn handle_suggest_industry(
    State(state): State<AppState>,
    Json(request): Json<SuggestIndustryRequest>,
) -> Result<Json<SuggestIndustryResponse>, AppError> {
    if request.company_description.trim().is_empty() {
        return Err(AppError::Validation(
            "companyDescription: Please describe your company.".to_string(),
        ));
    }

    let industries = request.variant.industries();
    let classifier = LlmIndustryClassifier::new(state.llm.clone(), industries);

    let industry = match classifier.classify(&request.company_description).await {
        Ok(industry) if industries.contains(&industry.as_str()) => Some(industry),
        Ok(foreign) => {
            debug!("dropping suggestion outside active list: {foreign}");
            None
        }
        Err(e) => {
            warn!("industry suggestion failed: {e}");
            None
        }
    };

    Ok(Json(SuggestIndustryResponse { industry }))
}
