use core::fmt;

use crate::error::{IssueError, Result};

/// An `owner/repo` pair on Github.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        let owner = check_segment("owner", owner.into().trim().to_string())?;
        let repo = check_segment("repo", repo.into().trim().to_string())?;

        Ok(Self { owner, repo })
    }

    /// Picks the flag value when present, otherwise the stored default.
    pub fn resolve(
        owner: Option<String>,
        repo: Option<String>,
        default_owner: &str,
        default_repo: &str,
    ) -> Result<Self> {
        Self::new(
            owner.unwrap_or_else(|| default_owner.to_string()),
            repo.unwrap_or_else(|| default_repo.to_string()),
        )
    }

    pub fn issues_url(&self, base: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

/// A single path segment of the issues url.
fn check_segment(part: &'static str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(IssueError::MissingRepository(part));
    }
    if value.contains(['/', '?', '#']) {
        return Err(IssueError::InvalidRepository(part, value));
    }
    Ok(value)
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
