// Cross-cutting prompt fragments shared by the briefing and suggestion flows.
// Each flow defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Brand persona prepended to every generation system prompt.
pub const BETELSEC_PERSONA: &str = "You are an expert Post-Quantum Cryptography (PQC) \
    and cybersecurity strategist working for BetelSec. \
    Your writing is concise, concrete, and aimed at decision-makers evaluating \
    their organization's exposure to quantum-era threats.";
