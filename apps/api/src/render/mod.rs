//! Markdown rendering — converts the constrained markdown subset the LLM is
//! instructed to emit into ordered display blocks.
//!
//! Per-line classification, in precedence order:
//! 1. `"* "` prefix → bullet, prefix stripped.
//! 2. empty or whitespace-only → spacer.
//! 3. anything else → paragraph, line kept verbatim.
//!
//! No merging, no reordering, one block per input line. Inline markers
//! (`**`, `_`) pass through as literal characters.

use serde::Serialize;

/// A single display block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Bullet(String),
    Spacer,
    Paragraph(String),
}

/// Renders markdown text into display blocks, line by line.
///
/// Contract edge case: the empty string renders as one empty paragraph
/// (splitting "" by newline yields one empty line, and callers rely on
/// getting a block back rather than nothing).
pub fn render_markdown(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return vec![Block::Paragraph(String::new())];
    }

    text.split('\n')
        .map(|line| {
            if let Some(rest) = line.strip_prefix("* ") {
                Block::Bullet(rest.to_string())
            } else if line.trim().is_empty() {
                Block::Spacer
            } else {
                Block::Paragraph(line.to_string())
            }
        })
        .collect()
}
