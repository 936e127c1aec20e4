//! Briefing request schema — form variants, enumerated industry lists,
//! and field-level validation.
//!
//! The two form variants differ only along one axis: which fields are
//! collected and which output sections are produced. Both are handled by one
//! request type gated by `BriefingVariant`.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Industry list for the quick assessment form.
pub const QUICK_INDUSTRIES: &[&str] = &[
    "Government & Defense",
    "Financial Institutions",
    "Critical Infrastructure",
    "Technology & IP",
    "Pharmaceuticals",
    "Healthcare",
    "Other",
];

/// Industry list for the full company-profile form and the industry
/// suggestion flow.
pub const FULL_INDUSTRIES: &[&str] = &[
    "Aerospace & Defense",
    "Automotive",
    "Banking & Capital Markets",
    "Chemicals",
    "Consumer Products",
    "Education",
    "Energy, Resources & Industrials",
    "Financial Services",
    "Government & Public Services",
    "Healthcare",
    "Hospitality",
    "Insurance",
    "Life Sciences & Pharmaceuticals",
    "Manufacturing",
    "Media & Entertainment",
    "Mining & Metals",
    "Oil, Gas & Chemicals",
    "Power, Utilities & Renewables",
    "Real Estate",
    "Retail",
    "Technology, Media & Telecommunications",
    "Transportation & Logistics",
    "Other",
];

/// The recognized form variants. Each fixes the collected fields, the active
/// industry list, and the output section keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BriefingVariant {
    /// Collects company name, industry (full list), enterprise size.
    /// Produces sensitiveData / threats / productRecommendations.
    #[default]
    Profile,
    /// Collects industry (short list) and sensitive data types.
    /// Produces topThreats / hndlScenarios / productRecommendations.
    Quick,
}

impl BriefingVariant {
    /// The closed set of valid industry values for this variant.
    pub fn industries(&self) -> &'static [&'static str] {
        match self {
            BriefingVariant::Profile => FULL_INDUSTRIES,
            BriefingVariant::Quick => QUICK_INDUSTRIES,
        }
    }
}

/// A risk assessment submission. Wire format is camelCase to match the site's
/// form payloads. Which optional fields are required depends on `variant`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingRequest {
    #[serde(default)]
    pub variant: BriefingVariant,
    pub company_name: Option<String>,
    pub industry: String,
    pub enterprise_size: Option<String>,
    pub data_types: Option<String>,
}

impl BriefingRequest {
    /// Field-level validation. `industry` is always required and must belong
    /// to the variant's enumerated list; the remaining requirements follow
    /// the variant.
    ///
    /// `enterprise_size` is deliberately NOT validated against the known set:
    /// unrecognized sizes take the conservative recommendation branch rather
    /// than failing (see `recommend`).
    pub fn validate(&self) -> Result<(), AppError> {
        if self.industry.is_empty() {
            return Err(AppError::Validation(
                "industry: Please select an industry.".to_string(),
            ));
        }
        if !self.variant.industries().contains(&self.industry.as_str()) {
            return Err(AppError::Validation(format!(
                "industry: '{}' is not a recognized industry for this form.",
                self.industry
            )));
        }

        match self.variant {
            BriefingVariant::Profile => {
                if self
                    .company_name
                    .as_deref()
                    .map_or(true, |n| n.trim().is_empty())
                {
                    return Err(AppError::Validation(
                        "companyName: Please enter your company name.".to_string(),
                    ));
                }
                if self.enterprise_size.as_deref().map_or(true, str::is_empty) {
                    return Err(AppError::Validation(
                        "enterpriseSize: Please select your company size.".to_string(),
                    ));
                }
            }
            BriefingVariant::Quick => {
                let data_types = self.data_types.as_deref().unwrap_or("");
                if data_types.chars().count() < 10 {
                    return Err(AppError::Validation(
                        "dataTypes: Please describe your data types in at least 10 characters."
                            .to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Briefing produced by the company-profile form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBriefing {
    pub sensitive_data: String,
    pub threats: String,
    pub product_recommendations: String,
}

/// Briefing produced by the quick assessment form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickBriefing {
    pub top_threats: String,
    pub hndl_scenarios: String,
    pub product_recommendations: String,
}

/// A generated risk briefing. Created fresh per submission, returned to the
/// caller, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RiskBriefing {
    Profile(ProfileBriefing),
    Quick(QuickBriefing),
}

impl RiskBriefing {
    /// The briefing's markdown sections, in display order, keyed by their
    /// wire name.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        match self {
            RiskBriefing::Profile(b) => vec![
                ("sensitiveData", b.sensitive_data.as_str()),
                ("threats", b.threats.as_str()),
                ("productRecommendations", b.product_recommendations.as_str()),
            ],
            RiskBriefing::Quick(b) => vec![
                ("topThreats", b.top_threats.as_str()),
                ("hndlScenarios", b.hndl_scenarios.as_str()),
                ("productRecommendations", b.product_recommendations.as_str()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_request() -> BriefingRequest {
        BriefingRequest {
            variant: BriefingVariant::Profile,
            company_name: Some("Acme Corp".to_string()),
            industry: "Healthcare".to_string(),
            enterprise_size: Some("medium".to_string()),
            data_types: None,
        }
    }

    fn quick_request() -> BriefingRequest {
        BriefingRequest {
            variant: BriefingVariant::Quick,
            company_name: None,
            industry: "Financial Institutions".to_string(),
            enterprise_size: None,
            data_types: Some("Transaction records and customer PII".to_string()),
        }
    }

    #[test]
    fn test_profile_request_valid() {
        assert!(profile_request().validate().is_ok());
    }

    #[test]
    fn test_quick_request_valid() {
        assert!(quick_request().validate().is_ok());
    }

    #[test]
    fn test_empty_industry_rejected() {
        let mut req = quick_request();
        req.industry = String::new();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("industry"));
    }

    #[test]
    fn test_industry_outside_active_list_rejected() {
        // "Retail" is valid on the full list but not on the quick form's list.
        let mut req = quick_request();
        req.industry = "Retail".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_same_industry_accepted_on_profile_list() {
        let mut req = profile_request();
        req.industry = "Retail".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_short_data_types_rejected() {
        let mut req = quick_request();
        req.data_types = Some("too short".to_string());
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("dataTypes"));
    }

    #[test]
    fn test_missing_company_name_rejected_on_profile() {
        let mut req = profile_request();
        req.company_name = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unrecognized_enterprise_size_is_not_a_validation_error() {
        // Unknown sizes fall through to the conservative recommendation
        // branch; they must never block submission.
        let mut req = profile_request();
        req.enterprise_size = Some("galactic".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "variant": "quick",
            "industry": "Healthcare",
            "dataTypes": "Patient medical records and billing data"
        });
        let req: BriefingRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.variant, BriefingVariant::Quick);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_variant_defaults_to_profile() {
        let json = serde_json::json!({
            "companyName": "Acme Corp",
            "industry": "Healthcare",
            "enterpriseSize": "small"
        });
        let req: BriefingRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.variant, BriefingVariant::Profile);
    }

    #[test]
    fn test_both_industry_lists_end_with_other() {
        assert_eq!(QUICK_INDUSTRIES.last(), Some(&"Other"));
        assert_eq!(FULL_INDUSTRIES.last(), Some(&"Other"));
        assert_eq!(QUICK_INDUSTRIES.len(), 7);
        assert_eq!(FULL_INDUSTRIES.len(), 23);
    }

    #[test]
    fn test_briefing_sections_preserve_order() {
        let briefing = RiskBriefing::Quick(QuickBriefing {
            top_threats: "a".to_string(),
            hndl_scenarios: "b".to_string(),
            product_recommendations: "c".to_string(),
        });
        let keys: Vec<_> = briefing.sections().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["topThreats", "hndlScenarios", "productRecommendations"]);
    }

    #[test]
    fn test_profile_briefing_serializes_camel_case() {
        let briefing = RiskBriefing::Profile(ProfileBriefing {
            sensitive_data: "s".to_string(),
            threats: "t".to_string(),
            product_recommendations: "p".to_string(),
        });
        let value = serde_json::to_value(&briefing).unwrap();
        assert_eq!(value["sensitiveData"], "s");
        assert_eq!(value["productRecommendations"], "p");
    }
}
