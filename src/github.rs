//! Github REST v3 issues endpoint.
//!
//! [`IssueApi`] is the seam the commands talk to; [`GitHubClient`] is the
//! `reqwest` implementation that sends exactly one request per call.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Method, Request, StatusCode};

use crate::error::{IssueError, Result};
use crate::models::{CreatedIssue, ListIssue, NewIssue, RepoRef};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const AGENT: &str = concat!("gh-issue/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait IssueApi: Send + Sync {
    /// Issues of `repo` in the order the API returns them.
    async fn list_issues(&self, repo: &RepoRef) -> Result<Vec<ListIssue>>;

    /// Creates `issue`; anything but `201 Created` is an error.
    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<CreatedIssue>;
}

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    pub fn list_request(&self, repo: &RepoRef) -> Result<Request> {
        let mut builder = self
            .client
            .get(repo.issues_url(&self.base_url))
            .header(ACCEPT, ACCEPT_V3)
            .header(USER_AGENT, AGENT);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder.build()?)
    }

    pub fn create_request(&self, repo: &RepoRef, issue: &NewIssue) -> Result<Request> {
        let token = self.token.as_ref().ok_or(IssueError::MissingToken)?;
        let request = self
            .client
            .post(repo.issues_url(&self.base_url))
            .bearer_auth(token)
            .header(ACCEPT, ACCEPT_V3)
            .header(USER_AGENT, AGENT)
            .json(issue)
            .build()?;
        Ok(request)
    }

    async fn execute(&self, request: Request) -> Result<reqwest::Response> {
        debug!("{} {}", request.method(), request.url());
        let response = self.client.execute(request).await?;
        debug!("Github API answered {}", response.status());
        Ok(response)
    }
}

/// List accepts any 2xx, create only 201.
pub fn check_status(method: &Method, status: StatusCode) -> Result<()> {
    let (ok, action) = if *method == Method::POST {
        (status == StatusCode::CREATED, "Failed to create issue")
    } else {
        (status.is_success(), "Failed to fetch issues")
    };

    if ok {
        Ok(())
    } else {
        Err(IssueError::UnexpectedStatus { action, status })
    }
}

#[async_trait]
impl IssueApi for GitHubClient {
    async fn list_issues(&self, repo: &RepoRef) -> Result<Vec<ListIssue>> {
        let request = self.list_request(repo)?;
        let response = self.execute(request).await?;
        check_status(&Method::GET, response.status())?;

        let issues = response.json::<Vec<ListIssue>>().await?;
        info!("Fetched {} issues from {}", issues.len(), repo);
        Ok(issues)
    }

    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<CreatedIssue> {
        let request = self.create_request(repo, issue)?;
        let response = self.execute(request).await?;
        check_status(&Method::POST, response.status())?;

        let created = response.json::<CreatedIssue>().await?;
        info!("Created issue #{} on {}", created.number, repo);
        Ok(created)
    }
}
