use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The service is stateless by design: briefings and suggestions are
/// request-scoped and never persisted.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Env-derived settings, kept alongside the clients that were built
    /// from them.
    #[allow(dead_code)]
    pub config: Config,
}
