use core::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{IssueError, Result};

/// An issue as returned by `GET /repos/{owner}/{repo}/issues`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListIssue {
    pub number: u64,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub html_url: String,
}

impl fmt::Display for ListIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} - {} [{}]", self.number, self.title, self.state)
    }
}

/// Payload for `POST /repos/{owner}/{repo}/issues`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
}

impl NewIssue {
    /// Fails with [`IssueError::EmptyTitle`] for a blank title.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(IssueError::EmptyTitle);
        }

        Ok(Self {
            title,
            body: String::new(),
            assignees: Vec::new(),
            labels: Vec::new(),
            milestone: None,
        })
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = clean_list(assignees);
        self
    }

    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = clean_list(labels);
        self
    }

    /// Milestone `0` means "no milestone".
    pub fn milestone(mut self, milestone: u64) -> Self {
        self.milestone = (milestone != 0).then_some(milestone);
        self
    }

    pub fn has_blank_body(&self) -> bool {
        self.body.trim().is_empty()
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// The part of the 201 response we report back to the user.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    #[serde(default)]
    pub html_url: String,
}

impl fmt::Display for CreatedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number, self.html_url)
    }
}
