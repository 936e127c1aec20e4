//! Product recommendation rules.
//!
//! The recommendation decision is made here, in code, and only elaborated by
//! the LLM downstream: the directive is interpolated into the generation
//! prompt, so the product set is deterministic and testable independent of
//! generation quality.
//!
//! Rules:
//! 1. PRISM is always recommended, always first.
//! 2. SYNAPSE and DSG are appended, in that order, iff the enterprise size is
//!    exactly "small" or "medium".
//! 3. "large" — and any unrecognized size — gets PRISM only, plus a note
//!    deferring deeper product mapping to a consultative engagement.

use serde::Serialize;

/// The BetelSec product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Product {
    Prism,
    Synapse,
    Dsg,
}

impl Product {
    pub fn name(&self) -> &'static str {
        match self {
            Product::Prism => "PRISM",
            Product::Synapse => "SYNAPSE",
            Product::Dsg => "DSG",
        }
    }

    /// The one-line framing used when the product is pitched.
    pub fn framing(&self) -> &'static str {
        match self {
            Product::Prism => {
                "the foundational layer: comprehensive data protection and \
                 AI-driven threat mitigation essential for any organization"
            }
            Product::Synapse => {
                "protects data in transit (e.g., network traffic, APIs)"
            }
            Product::Dsg => "protects data at rest (e.g., databases, stored files)",
        }
    }
}

/// Enterprise size as submitted by the form. Matching is case-sensitive:
/// anything other than the exact literals "small", "medium", "large" is
/// unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterpriseSize {
    Small,
    Medium,
    Large,
}

impl EnterpriseSize {
    pub fn from_input(value: &str) -> Option<Self> {
        match value {
            "small" => Some(EnterpriseSize::Small),
            "medium" => Some(EnterpriseSize::Medium),
            "large" => Some(EnterpriseSize::Large),
            _ => None,
        }
    }
}

/// The deterministic recommendation decision, prior to natural-language
/// elaboration. Derived per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationDirective {
    /// Ordered: PRISM first, then SYNAPSE and DSG when included.
    pub products: Vec<Product>,
    /// Present only on the large/unrecognized branch.
    pub deferral_note: Option<String>,
}

const DEFERRAL_NOTE: &str = "The needs of a large enterprise are complex and require a \
    deeper, consultative engagement to map out a full solution architecture. \
    Recommend only PRISM as the initial talking point and invite a follow-up \
    conversation with a BetelSec architect.";

/// Maps an enterprise size to the product set to foreground.
///
/// Unrecognized sizes take the minimal (large-enterprise) branch: when we do
/// not know how big the company is, we must not over-promise.
pub fn recommend(enterprise_size: &str) -> RecommendationDirective {
    match EnterpriseSize::from_input(enterprise_size) {
        Some(EnterpriseSize::Small) | Some(EnterpriseSize::Medium) => RecommendationDirective {
            products: vec![Product::Prism, Product::Synapse, Product::Dsg],
            deferral_note: None,
        },
        Some(EnterpriseSize::Large) | None => RecommendationDirective {
            products: vec![Product::Prism],
            deferral_note: Some(DEFERRAL_NOTE.to_string()),
        },
    }
}

impl RecommendationDirective {
    /// Renders the directive as the natural-language rules block interpolated
    /// into the generation prompt. The LLM elaborates this decision; it does
    /// not get to make its own.
    pub fn prompt_block(&self) -> String {
        let mut lines = Vec::with_capacity(self.products.len() + 1);
        for (i, product) in self.products.iter().enumerate() {
            lines.push(format!(
                "{}. Recommend {} — {}.",
                i + 1,
                product.name(),
                product.framing()
            ));
        }
        if let Some(note) = &self.deferral_note {
            lines.push(format!("Note: {note}"));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_gets_all_three_in_order() {
        let directive = recommend("small");
        assert_eq!(
            directive.products,
            [Product::Prism, Product::Synapse, Product::Dsg]
        );
        assert!(directive.deferral_note.is_none());
    }

    #[test]
    fn test_medium_gets_all_three_in_order() {
        let directive = recommend("medium");
        assert_eq!(
            directive.products,
            [Product::Prism, Product::Synapse, Product::Dsg]
        );
        assert!(directive.deferral_note.is_none());
    }

    #[test]
    fn test_large_gets_prism_only_with_deferral() {
        let directive = recommend("large");
        assert_eq!(directive.products, [Product::Prism]);
        assert!(directive.deferral_note.is_some());
    }

    #[test]
    fn test_unrecognized_size_takes_minimal_branch() {
        for size in ["", "huge", "SMALL", "Medium", " small", "enterprise"] {
            let directive = recommend(size);
            assert_eq!(directive.products, [Product::Prism], "size {size:?}");
            assert!(directive.deferral_note.is_some(), "size {size:?}");
        }
    }

    #[test]
    fn test_prism_is_always_first() {
        for size in ["small", "medium", "large", "unknown"] {
            assert_eq!(recommend(size).products[0], Product::Prism);
        }
    }

    #[test]
    fn test_size_parsing_is_case_sensitive() {
        assert_eq!(EnterpriseSize::from_input("small"), Some(EnterpriseSize::Small));
        assert_eq!(EnterpriseSize::from_input("Small"), None);
        assert_eq!(EnterpriseSize::from_input("LARGE"), None);
    }

    #[test]
    fn test_prompt_block_names_products() {
        let block = recommend("small").prompt_block();
        assert!(block.contains("PRISM"));
        assert!(block.contains("SYNAPSE"));
        assert!(block.contains("DSG"));
        assert!(block.contains("in transit"));
        assert!(block.contains("at rest"));
    }

    #[test]
    fn test_prompt_block_large_omits_conditional_products() {
        let block = recommend("large").prompt_block();
        assert!(block.contains("PRISM"));
        assert!(!block.contains("SYNAPSE"));
        assert!(!block.contains("DSG"));
        assert!(block.contains("consultative"));
    }
}
