use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::scoring::benchmark::WORLD_CLASS;
use crate::scoring::models::{CategoryComparison, Comparison, Repository, ScoreBreakdown};

// Category ceilings and per-qualifier points.
const DOCUMENTATION_CEILING: u32 = 20;
const CONSISTENCY_CEILING: u32 = 15;
const IMPACT_CEILING: u32 = 20;
const STRUCTURE_CEILING: u32 = 15;
const DEPTH_CEILING: u32 = 15;

const DOCUMENTATION_POINTS: u32 = 3;
const CONSISTENCY_POINTS: u32 = 2;
const STRUCTURE_POINTS: u32 = 2;
const DEPTH_POINTS: u32 = 3;

/// Every profile starts from this floor before category scores are added.
const BASE_SCORE: u32 = 20;
const MAX_TOTAL: u32 = 100;

/// A README at or below this length is not real documentation.
const README_MIN_CHARS: usize = 300;
/// Pushes strictly inside this window count toward consistency.
const RECENT_WINDOW_DAYS: f64 = 30.0;

// Suggestion triggers. Looser than the world-class benchmark: a profile
// can clear every trigger here and still trail the benchmark in every
// category.
const MIN_DOCUMENTED_REPOS: usize = 3;
const MIN_RECENT_REPOS: usize = 2;
const MIN_TOTAL_STARS: u64 = 5;
const MIN_STRUCTURED_REPOS: usize = 3;
const MIN_DISTINCT_LANGUAGES: usize = 3;

/// Reduces a repository list to five bounded category scores plus
/// qualitative feedback. Pure: recency is measured against the `now`
/// argument, so callers pass `Utc::now()` and tests pin a timestamp.
pub fn calculate_score(repos: &[Repository], now: DateTime<Utc>) -> ScoreBreakdown {
    let mut suggestions = Vec::new();
    let mut gap_suggestions = Vec::new();

    // Documentation: substantial READMEs.
    let documented = repos
        .iter()
        .filter(|r| r.readme.chars().count() > README_MIN_CHARS)
        .count();
    let documentation_score =
        (documented as u32 * DOCUMENTATION_POINTS).min(DOCUMENTATION_CEILING);
    if documented < MIN_DOCUMENTED_REPOS {
        suggestions.push(
            "Most repositories lack professional README documentation with setup steps and architecture."
                .to_string(),
        );
    }

    // Consistency: pushes inside the recency window.
    let recent = repos
        .iter()
        .filter(|r| pushed_within_window(r.pushed_at.as_deref(), now))
        .count();
    let consistency_score = (recent as u32 * CONSISTENCY_POINTS).min(CONSISTENCY_CEILING);
    if recent < MIN_RECENT_REPOS {
        suggestions.push(
            "Your GitHub activity is inconsistent. Recruiters prefer weekly commits.".to_string(),
        );
    }

    // Impact: raw star sum clamped at the ceiling, so a single popular
    // repository can saturate the category on its own.
    let total_stars: u64 = repos.iter().map(|r| u64::from(r.stargazers_count)).sum();
    let impact_score = total_stars.min(u64::from(IMPACT_CEILING)) as u32;
    if total_stars < MIN_TOTAL_STARS {
        suggestions.push(
            "Your projects lack real-world impact. Build deployable projects with users."
                .to_string(),
        );
    }

    // Structure: READMEs with install/usage sections.
    let structured = repos
        .iter()
        .filter(|r| {
            let readme = r.readme.to_lowercase();
            readme.contains("install") || readme.contains("usage")
        })
        .count();
    let structure_score = (structured as u32 * STRUCTURE_POINTS).min(STRUCTURE_CEILING);
    if structured < MIN_STRUCTURED_REPOS {
        suggestions.push(
            "Repositories are not structured professionally. Add setup and usage sections."
                .to_string(),
        );
    }

    // Depth: distinct primary languages.
    let languages: HashSet<&str> = repos.iter().filter_map(|r| r.language.as_deref()).collect();
    let depth_score = (languages.len() as u32 * DEPTH_POINTS).min(DEPTH_CEILING);
    if languages.len() < MIN_DISTINCT_LANGUAGES {
        suggestions.push(
            "Your GitHub shows limited technical depth. Add backend, database or AI projects."
                .to_string(),
        );
    }

    // Gap analysis against the world-class targets, independent of the
    // triggers above.
    if documentation_score < WORLD_CLASS.documentation {
        gap_suggestions.push(
            "World-class developers maintain detailed README with architecture diagrams and screenshots."
                .to_string(),
        );
    }
    if consistency_score < WORLD_CLASS.consistency {
        gap_suggestions.push(
            "Top developers show consistent weekly contributions and active repos.".to_string(),
        );
    }
    if impact_score < WORLD_CLASS.impact {
        gap_suggestions.push(
            "World-class profiles have starred or widely used projects with real users."
                .to_string(),
        );
    }
    if depth_score < WORLD_CLASS.depth {
        gap_suggestions.push(
            "Top GitHub profiles show full-stack depth including backend and scalable systems."
                .to_string(),
        );
    }
    if structure_score < WORLD_CLASS.structure {
        gap_suggestions.push(
            "Top repositories follow clean architecture and modular structure.".to_string(),
        );
    }

    if suggestions.is_empty() {
        suggestions.push(
            "Your GitHub profile is strong. Focus on building one standout flagship project."
                .to_string(),
        );
        suggestions.push(
            "Maintain consistent commits and keep improving project documentation.".to_string(),
        );
    }

    let total = documentation_score
        + consistency_score
        + impact_score
        + structure_score
        + depth_score
        + BASE_SCORE;

    ScoreBreakdown {
        total_score: total.min(MAX_TOTAL),
        documentation_score,
        consistency_score,
        impact_score,
        structure_score,
        depth_score,
        suggestions,
        gap_suggestions,
        comparison: Comparison {
            documentation: CategoryComparison {
                user: documentation_score,
                world: WORLD_CLASS.documentation,
            },
            consistency: CategoryComparison {
                user: consistency_score,
                world: WORLD_CLASS.consistency,
            },
            impact: CategoryComparison {
                user: impact_score,
                world: WORLD_CLASS.impact,
            },
            structure: CategoryComparison {
                user: structure_score,
                world: WORLD_CLASS.structure,
            },
            depth: CategoryComparison {
                user: depth_score,
                world: WORLD_CLASS.depth,
            },
        },
        repo_count: repos.len(),
    }
}

/// Whether `pushed_at` parses and falls strictly inside the recency
/// window. Unparsable timestamps do not qualify.
fn pushed_within_window(pushed_at: Option<&str>, now: DateTime<Utc>) -> bool {
    let Some(raw) = pushed_at else {
        return false;
    };
    let Ok(pushed) = raw.parse::<DateTime<Utc>>() else {
        return false;
    };
    let age_days = (now - pushed).num_milliseconds() as f64 / 86_400_000.0;
    age_days < RECENT_WINDOW_DAYS
}
