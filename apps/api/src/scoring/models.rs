use serde::{Deserialize, Serialize};

/// A single public repository as delivered by the profile fetcher.
///
/// `pushed_at` stays a raw timestamp string: an absent or unparsable value
/// must degrade to "does not qualify" inside the calculator instead of
/// failing the whole evaluation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub language: Option<String>,
}

/// One category's user score next to the world-class target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub user: u32,
    pub world: u32,
}

/// Per-category comparison map rendered alongside the score chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub documentation: CategoryComparison,
    pub consistency: CategoryComparison,
    pub impact: CategoryComparison,
    pub structure: CategoryComparison,
    pub depth: CategoryComparison,
}

/// Output of the score calculator, serialized as-is for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total_score: u32,
    pub documentation_score: u32,
    pub consistency_score: u32,
    pub impact_score: u32,
    pub structure_score: u32,
    pub depth_score: u32,
    pub suggestions: Vec<String>,
    pub gap_suggestions: Vec<String>,
    pub comparison: Comparison,
    pub repo_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repository_fills_defaults_for_missing_fields() {
        let repo: Repository = serde_json::from_value(json!({ "name": "demo" })).unwrap();
        assert_eq!(repo.readme, "");
        assert_eq!(repo.stargazers_count, 0);
        assert!(repo.pushed_at.is_none());
        assert!(repo.language.is_none());
    }

    #[test]
    fn repository_ignores_unknown_api_fields() {
        let repo: Repository = serde_json::from_value(json!({
            "name": "demo",
            "stargazers_count": 7,
            "language": "Rust",
            "html_url": "https://github.com/user/demo",
            "fork": false
        }))
        .unwrap();
        assert_eq!(repo.stargazers_count, 7);
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }
}
