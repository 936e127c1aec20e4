// Prompt templates for the risk briefing flow.
// The {product_directive} slot is filled from the recommendation rule engine,
// not written by hand — the LLM elaborates the decision, it does not make it.

/// Briefing prompt for the company-profile form.
/// Replace: {company_name}, {industry}, {enterprise_size}, {product_directive}
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"Generate a concise, personalized quantum risk briefing for a potential client.

The client's company is '{company_name}'. They are in the '{industry}' industry and their company size is '{enterprise_size}'.

Return a JSON object with this EXACT schema (no extra fields):
{
  "sensitiveData": "markdown string",
  "threats": "markdown string",
  "productRecommendations": "markdown string"
}

Each value is a markdown-formatted string. Use bullet points ("* " at the start of a line) for lists and blank lines between paragraphs. Every point must be directly relevant to a company like {company_name}.

1. sensitiveData — Identify and list the most critical sensitive data types that an organization like {company_name} typically handles within the '{industry}' sector.

2. threats — Threat analysis and real-world impact for the {industry} sector:
* Describe the most likely quantum and classical cyber threats that a company of '{enterprise_size}' size in this industry faces (e.g., Harvest Now, Decrypt Later, state-sponsored espionage, ransomware).
* Comment on how frequently companies in this sector are targeted.
* Give a specific, well-known real-world cyberattack that recently impacted the '{industry}' sector (e.g., Change Healthcare for healthcare, CDK Global for automotive). Describe the attack and state the financial loss as a multi-million dollar figure to underscore the severity.

3. productRecommendations — Recommend BetelSec products for {company_name} following these rules EXACTLY, in this order:
{product_directive}
Do not add, remove, or reorder products."#;

/// Briefing prompt for the quick assessment form.
/// Replace: {industry}, {data_types}, {product_directive}
pub const QUICK_PROMPT_TEMPLATE: &str = r#"Generate a concise quantum risk briefing for an organization in the '{industry}' industry.

They describe their sensitive data as: {data_types}

Return a JSON object with this EXACT schema (no extra fields):
{
  "topThreats": "markdown string",
  "hndlScenarios": "markdown string",
  "productRecommendations": "markdown string"
}

Each value is a markdown-formatted string. Use bullet points ("* " at the start of a line) for lists and blank lines between paragraphs.

1. topThreats — The top quantum threats facing this industry, tied to the data types described above.

2. hndlScenarios — Concrete "Harvest Now, Decrypt Later" scenarios: how an adversary recording this organization's encrypted traffic today could exploit it once cryptographically relevant quantum computers arrive.

3. productRecommendations — Recommend BetelSec products following these rules EXACTLY, in this order:
{product_directive}
Do not add, remove, or reorder products."#;

/// Industry classification prompt for the suggestion flow.
/// Replace: {company_description}, {industry_options}
pub const SUGGEST_PROMPT_TEMPLATE: &str = r#"Based on the following company description, select the single best-fitting industry from the provided list.

Company Description: {company_description}

Return a JSON object with this EXACT schema:
{
  "industry": "one of the options below, copied verbatim"
}

Your choice MUST be one of the following options:
{industry_options}"#;
