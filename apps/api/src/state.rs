use std::sync::Arc;

use crate::github::GithubClient;
use crate::review::NarrativeReviewer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub github: GithubClient,
    /// Pluggable narrative backend. Default: `LlmNarrativeReviewer`.
    pub reviewer: Arc<dyn NarrativeReviewer>,
}
