//! Narrative reviewer — free-text recruiter commentary behind a trait so
//! transports never depend on a concrete backend.

use async_trait::async_trait;

use crate::evaluator::EvaluationSummary;
use crate::llm_client::{prompts, LlmClient, LlmError};

/// Served when the reviewer backend is unavailable. The analyze handler
/// falls back to this rather than failing the request.
pub const FALLBACK_REVIEW: &str = "Automated reviewer commentary is temporarily unavailable. \
    The score breakdown and recruiter verdict reflect the full rule-based analysis of this profile.";

/// Free-text commentary backend, held in `AppState` as
/// `Arc<dyn NarrativeReviewer>`.
#[async_trait]
pub trait NarrativeReviewer: Send + Sync {
    async fn review(&self, summary: &EvaluationSummary) -> Result<String, LlmError>;
}

/// Reviewer backed by the Anthropic Messages API.
pub struct LlmNarrativeReviewer {
    llm: LlmClient,
}

impl LlmNarrativeReviewer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl NarrativeReviewer for LlmNarrativeReviewer {
    async fn review(&self, summary: &EvaluationSummary) -> Result<String, LlmError> {
        let prompt = prompts::recruiter_review_prompt(
            &summary.username,
            summary.total_score,
            summary.repo_count,
        );
        let response = self.llm.call(&prompt, prompts::RECRUITER_SYSTEM).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
