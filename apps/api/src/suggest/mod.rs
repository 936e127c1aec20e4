// Industry suggestion flow: an LLM-backed classifier behind a trait seam,
// a debounced controller for interactive clients, and the HTTP handler.
// Suggestion is a non-critical enhancement — every failure here is logged
// and swallowed, never surfaced to the user.

pub mod classifier;
pub mod controller;
pub mod handlers;

pub use classifier::{IndustryClassifier, LlmIndustryClassifier};
pub use controller::SuggestionController;
