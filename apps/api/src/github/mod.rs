//! GitHub profile fetcher — the single point of entry for GitHub REST
//! API calls. The scoring core never touches this module; it only
//! consumes the `Repository` records produced here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::scoring::models::Repository;

const GITHUB_API_URL: &str = "https://api.github.com";
const REPOS_PER_PAGE: u32 = 100;
const USER_AGENT: &str = concat!("gitgauge/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub user '{0}' not found")]
    UserNotFound(String),

    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Account metadata for the analyzed profile.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
}

/// A fetched profile snapshot: the account record plus repositories with
/// README text already decoded.
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub user: GithubUser,
    pub repos: Vec<Repository>,
}

#[derive(Debug, Deserialize)]
struct ReadmeResponse {
    content: String,
}

/// Authenticated GitHub REST client.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    token: String,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }

    /// Fetches the account record, the repository list, and per-repository
    /// README text for one username.
    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileData, GithubError> {
        let user = self.fetch_user(username).await?;
        let mut repos = self.fetch_repos(username).await?;

        // A repository without a fetchable README is an expected state,
        // not an error: it scores with the empty string.
        for repo in &mut repos {
            repo.readme = self
                .fetch_readme(username, &repo.name)
                .await
                .unwrap_or_default();
        }

        debug!("Fetched {} repositories for {username}", repos.len());

        Ok(ProfileData { user, repos })
    }

    async fn fetch_user(&self, username: &str) -> Result<GithubUser, GithubError> {
        let response = self.get(&format!("/users/{username}")).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GithubError::UserNotFound(username.to_string()));
        }
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>, GithubError> {
        let response = self
            .get(&format!("/users/{username}/repos?per_page={REPOS_PER_PAGE}"))
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_readme(&self, username: &str, repo: &str) -> Result<String, GithubError> {
        let response = self.get(&format!("/repos/{username}/{repo}/readme")).await?;
        let response = check_status(response).await?;
        let readme: ReadmeResponse = response.json().await?;
        Ok(decode_readme(&readme.content))
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, GithubError> {
        Ok(self
            .client
            .get(format!("{GITHUB_API_URL}{path}"))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GithubError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(GithubError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

/// Decodes the base64 payload the contents API returns for READMEs.
/// GitHub line-wraps the encoding, so whitespace is stripped first.
/// Invalid UTF-8 is replaced rather than treated as fatal.
fn decode_readme(content: &str) -> String {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}
