use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::{IssueError, Result};
use crate::models::ListIssue;

/// Everything that needs a human at the terminal.
pub trait Interaction {
    fn issue_body(&mut self) -> Result<String>;

    /// `None` when the user backs out of the menu.
    fn select_issue(&mut self, issues: &[ListIssue]) -> Result<Option<usize>>;

    fn open_in_browser(&mut self, url: &str) -> Result<()>;
}

#[derive(Default)]
pub struct Console;

impl Interaction for Console {
    fn issue_body(&mut self) -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter issue body")
            .allow_empty(true)
            .interact_text()
            .map_err(IssueError::Prompt)
    }

    fn select_issue(&mut self, issues: &[ListIssue]) -> Result<Option<usize>> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select an issue:")
            .default(0)
            .items(issues)
            .interact_opt()
            .map_err(IssueError::Prompt)
    }

    fn open_in_browser(&mut self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(IssueError::Browser)
    }
}
