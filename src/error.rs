use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IssueError>;

#[derive(Error, Debug)]
pub enum IssueError {
    #[error("Issue title must not be empty")]
    EmptyTitle,

    #[error("No repository {0} given. Pass --{0} or store a default with `gh-issue config --{0}`")]
    MissingRepository(&'static str),

    #[error("Invalid repository {0} {1:?}: must not contain '/', '?' or '#'")]
    InvalidRepository(&'static str, String),

    #[error("No Github access token set. Set GITHUB_PAT, pass --token or run `gh-issue config --token`")]
    MissingToken,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{action}: Github API returned {status}")]
    UnexpectedStatus {
        action: &'static str,
        status: StatusCode,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("Could not open browser: {0}")]
    Browser(#[source] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] confy::ConfyError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
