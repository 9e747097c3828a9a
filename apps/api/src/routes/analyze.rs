use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::evaluator::{evaluate, EvaluationSummary, RecruiterVerdict};
use crate::review::FALLBACK_REVIEW;
use crate::scoring::calculator::calculate_score;
use crate::scoring::models::{Repository, ScoreBreakdown};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub profile_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub username: String,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub verdict: RecruiterVerdict,
    pub review: String,
}

/// POST /api/v1/analyze
/// Full pipeline: fetch profile, score, evaluate, narrative review.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let username = parse_username(&req.profile_url)?;
    info!("Analyzing profile: {username}");

    let profile = state.github.fetch_profile(&username).await?;
    // Canonical casing from the account record, not the raw link text.
    let username = profile.user.login.clone();

    let breakdown = calculate_score(&profile.repos, Utc::now());

    let summary = EvaluationSummary {
        username: username.clone(),
        repo_count: breakdown.repo_count,
        total_score: breakdown.total_score,
        documentation_score: breakdown.documentation_score,
        consistency_score: breakdown.consistency_score,
        impact_score: breakdown.impact_score,
        structure_score: breakdown.structure_score,
        depth_score: breakdown.depth_score,
        languages: distinct_languages(&profile.repos),
    };

    let verdict = evaluate(&summary);

    // A reviewer outage degrades to fixed fallback text; it never fails
    // the request.
    let review = match state.reviewer.review(&summary).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Narrative review unavailable, serving fallback: {e}");
            FALLBACK_REVIEW.to_string()
        }
    };

    Ok(Json(AnalyzeResponse {
        success: true,
        username,
        breakdown,
        verdict,
        review,
    }))
}

/// Extracts the username from a GitHub profile link: the first path
/// segment after `github.com`.
fn parse_username(profile_url: &str) -> Result<String, AppError> {
    let (_, rest) = profile_url
        .split_once("github.com")
        .ok_or_else(|| AppError::Validation("A GitHub profile link is required".to_string()))?;

    let username = rest
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    if username.is_empty() {
        return Err(AppError::Validation(
            "The link does not contain a GitHub username".to_string(),
        ));
    }

    Ok(username.to_string())
}

/// Comma-joined distinct languages in first-seen order.
fn distinct_languages(repos: &[Repository]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        if !seen.contains(&language) {
            seen.push(language);
        }
    }
    seen.join(", ")
}
