//! Axum route handlers for the briefing API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::briefing::generator::generate_briefing;
use crate::briefing::schema::{BriefingRequest, RiskBriefing};
use crate::errors::AppError;
use crate::render::{render_markdown, Block};
use crate::state::AppState;

/// A briefing section rendered for display: the raw markdown plus its
/// block decomposition, keyed by the section's wire name.
#[derive(Debug, Serialize)]
pub struct RenderedSection {
    pub key: &'static str,
    pub markdown: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
pub struct BriefingResponse {
    pub briefing: RiskBriefing,
    pub sections: Vec<RenderedSection>,
}

/// POST /api/v1/briefings
///
/// Validates the submission, generates the briefing via the LLM, and returns
/// each markdown section alongside its display blocks.
pub async fn handle_generate_briefing(
    State(state): State<AppState>,
    Json(request): Json<BriefingRequest>,
) -> Result<Json<BriefingResponse>, AppError> {
    let briefing = generate_briefing(&state.llm, &request).await?;

    let sections = briefing
        .sections()
        .into_iter()
        .map(|(key, markdown)| RenderedSection {
            key,
            markdown: markdown.to_string(),
            blocks: render_markdown(markdown),
        })
        .collect();

    Ok(Json(BriefingResponse { briefing, sections }))
}
