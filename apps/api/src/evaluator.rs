//! Recruiter evaluator — maps a score summary to a hiring verdict.
//!
//! Every rule lives in an ordered constant table and is applied
//! first-match-wins (tiers) or independently (weaknesses, improvements).
//! The rule floors here are distinct from both the calculator's
//! suggestion triggers and the world-class benchmark.

use serde::{Deserialize, Serialize};

/// Flat score summary handed to the evaluator, built by the transport
/// layer from a `ScoreBreakdown` plus the username and language join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub username: String,
    pub repo_count: usize,
    pub total_score: u32,
    pub documentation_score: u32,
    pub consistency_score: u32,
    pub impact_score: u32,
    pub structure_score: u32,
    pub depth_score: u32,
    pub languages: String,
}

/// Rule-derived hiring signals for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterVerdict {
    pub decision: String,
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
    pub next_project: String,
    pub score: u32,
    pub languages: String,
}

type Metric = fn(&EvaluationSummary) -> u32;

/// Decision tiers, highest floor first; the first tier the total score
/// meets wins.
const DECISION_TIERS: &[(u32, &str)] = &[
    (85, "Strong YES — shortlist"),
    (70, "Maybe — internship-tier shortlist"),
    (50, "Low — needs stronger projects"),
    (0, "NO — not yet recruiter ready"),
];

/// Weakness rules: metric, floor, message. Each rule below its floor
/// fires independently.
const WEAKNESS_RULES: &[(Metric, u32, &str)] = &[
    (
        |s: &EvaluationSummary| s.documentation_score,
        12,
        "Poor README and documentation",
    ),
    (
        |s: &EvaluationSummary| s.consistency_score,
        10,
        "Low commit consistency",
    ),
    (
        |s: &EvaluationSummary| s.impact_score,
        8,
        "Projects lack real-world impact",
    ),
    (
        |s: &EvaluationSummary| s.depth_score,
        10,
        "Limited technical depth",
    ),
    (
        |s: &EvaluationSummary| s.repo_count as u32,
        5,
        "Too few strong repositories",
    ),
];

const NO_WEAKNESSES: &str = "No major weaknesses detected";

/// Improvement rules, same shape as the weakness rules but with higher
/// floors; this list may legitimately end up empty.
const IMPROVEMENT_RULES: &[(Metric, u32, &str)] = &[
    (
        |s: &EvaluationSummary| s.documentation_score,
        15,
        "Add detailed README with architecture, screenshots, and setup guide",
    ),
    (
        |s: &EvaluationSummary| s.consistency_score,
        12,
        "Maintain weekly consistent commits",
    ),
    (
        |s: &EvaluationSummary| s.impact_score,
        12,
        "Build real-world deployable projects with users",
    ),
    (
        |s: &EvaluationSummary| s.depth_score,
        12,
        "Add backend, database and scalable projects",
    ),
];

/// Next-project tiers, highest floor first.
const NEXT_PROJECT_TIERS: &[(u32, &str)] = &[
    (
        80,
        "Build a large-scale system design or AI product that can gain real users.",
    ),
    (
        60,
        "Create a flagship AI or SaaS project that solves a real-world problem.",
    ),
    (
        0,
        "Build a full-stack production-ready project with authentication and deployment.",
    ),
];

/// Maps a score summary to a hiring verdict. Pure and deterministic;
/// `score` and `languages` pass through unchanged.
pub fn evaluate(summary: &EvaluationSummary) -> RecruiterVerdict {
    let decision = match_tier(DECISION_TIERS, summary.total_score);

    let mut weaknesses: Vec<String> = WEAKNESS_RULES
        .iter()
        .filter(|(metric, floor, _)| metric(summary) < *floor)
        .map(|(_, _, message)| message.to_string())
        .collect();
    if weaknesses.is_empty() {
        weaknesses.push(NO_WEAKNESSES.to_string());
    }

    let improvements: Vec<String> = IMPROVEMENT_RULES
        .iter()
        .filter(|(metric, floor, _)| metric(summary) < *floor)
        .map(|(_, _, message)| message.to_string())
        .collect();

    let next_project = match_tier(NEXT_PROJECT_TIERS, summary.total_score);

    RecruiterVerdict {
        decision,
        weaknesses,
        improvements,
        next_project,
        score: summary.total_score,
        languages: summary.languages.clone(),
    }
}

/// First tier whose floor the score meets. The tables end with a floor of
/// 0, so a match always exists.
fn match_tier(tiers: &[(u32, &str)], score: u32) -> String {
    tiers
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, label)| label.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total_score: u32) -> EvaluationSummary {
        EvaluationSummary {
            username: "octocat".to_string(),
            repo_count: 10,
            total_score,
            documentation_score: 20,
            consistency_score: 15,
            impact_score: 20,
            structure_score: 15,
            depth_score: 15,
            languages: "Rust, Go".to_string(),
        }
    }

    fn weak_summary() -> EvaluationSummary {
        EvaluationSummary {
            username: "newcomer".to_string(),
            repo_count: 2,
            total_score: 20,
            documentation_score: 0,
            consistency_score: 0,
            impact_score: 0,
            structure_score: 0,
            depth_score: 0,
            languages: String::new(),
        }
    }

    #[test]
    fn decision_boundaries_are_inclusive() {
        assert_eq!(evaluate(&summary(85)).decision, "Strong YES — shortlist");
        assert_eq!(
            evaluate(&summary(84)).decision,
            "Maybe — internship-tier shortlist"
        );
        assert_eq!(
            evaluate(&summary(70)).decision,
            "Maybe — internship-tier shortlist"
        );
        assert_eq!(
            evaluate(&summary(69)).decision,
            "Low — needs stronger projects"
        );
        assert_eq!(
            evaluate(&summary(50)).decision,
            "Low — needs stronger projects"
        );
        assert_eq!(
            evaluate(&summary(49)).decision,
            "NO — not yet recruiter ready"
        );
        assert_eq!(
            evaluate(&summary(0)).decision,
            "NO — not yet recruiter ready"
        );
    }

    #[test]
    fn all_weakness_rules_fire_in_order() {
        let verdict = evaluate(&weak_summary());
        assert_eq!(
            verdict.weaknesses,
            vec![
                "Poor README and documentation",
                "Low commit consistency",
                "Projects lack real-world impact",
                "Limited technical depth",
                "Too few strong repositories",
            ]
        );
    }

    #[test]
    fn strong_profile_gets_weakness_fallback() {
        let verdict = evaluate(&summary(95));
        assert_eq!(verdict.weaknesses, vec![NO_WEAKNESSES]);
    }

    #[test]
    fn improvements_empty_when_floors_cleared() {
        let mut cleared = summary(90);
        cleared.documentation_score = 15;
        cleared.consistency_score = 12;
        cleared.impact_score = 12;
        cleared.depth_score = 12;
        assert!(evaluate(&cleared).improvements.is_empty());
    }

    #[test]
    fn improvement_rules_fire_independently() {
        let mut partial = summary(90);
        partial.documentation_score = 14;
        let verdict = evaluate(&partial);
        assert_eq!(
            verdict.improvements,
            vec!["Add detailed README with architecture, screenshots, and setup guide"]
        );
    }

    #[test]
    fn weakness_floors_are_looser_than_improvement_floors() {
        // documentation 13 is fine for the weakness pass but still below
        // the improvement floor.
        let mut mid = summary(90);
        mid.documentation_score = 13;
        let verdict = evaluate(&mid);
        assert_eq!(verdict.weaknesses, vec![NO_WEAKNESSES]);
        assert_eq!(verdict.improvements.len(), 1);
    }

    #[test]
    fn next_project_tiers() {
        assert!(evaluate(&summary(59)).next_project.contains("full-stack"));
        assert!(evaluate(&summary(60)).next_project.contains("flagship"));
        assert!(evaluate(&summary(79)).next_project.contains("flagship"));
        assert!(evaluate(&summary(80)).next_project.contains("large-scale"));
    }

    #[test]
    fn score_and_languages_pass_through() {
        let verdict = evaluate(&summary(77));
        assert_eq!(verdict.score, 77);
        assert_eq!(verdict.languages, "Rust, Go");
    }

    #[test]
    fn verdict_serializes_camel_case() {
        let value = serde_json::to_value(evaluate(&summary(85))).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("nextProject"));
        assert!(object.contains_key("weaknesses"));
        assert!(object.contains_key("decision"));
    }
}
