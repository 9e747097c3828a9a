// Prompt constants and builders for the narrative reviewer.

/// System prompt establishing the recruiter persona.
pub const RECRUITER_SYSTEM: &str = "You are a senior software recruiter at a top tech company. \
    You review GitHub profiles honestly and directly, in plain professional language.";

/// User prompt for one profile review.
pub fn recruiter_review_prompt(username: &str, score: u32, repo_count: usize) -> String {
    format!(
        "You are reviewing the GitHub profile of user \"{username}\".\n\
         \n\
         GitHub score: {score}/100\n\
         Public repositories: {repo_count}\n\
         \n\
         Write an honest recruiter review:\n\
         - What impresses you\n\
         - What looks weak\n\
         - What must be improved to get hired\n\
         - Be direct and professional\n\
         - Max 120 words"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_prompt_embeds_profile_facts() {
        let prompt = recruiter_review_prompt("octocat", 73, 12);
        assert!(prompt.contains("\"octocat\""));
        assert!(prompt.contains("73/100"));
        assert!(prompt.contains("Public repositories: 12"));
    }
}
