use std::sync::Arc;

use crate::config::Config;
use crate::tailor::generator::TextGenerator;

/// Shared application state injected into route handlers via Axum extractors.
///
/// The analysis and humanizer handlers are pure and take nothing from here;
/// only tailoring needs the generation backend.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable tailoring backend. Default: StubGenerator. Swap to the LLM
    /// backend via the TAILOR_USE_LLM env var.
    pub generator: Arc<dyn TextGenerator>,
}
