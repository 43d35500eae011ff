use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const APP_NAME: &str = "gh-issue";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub github_access_token: String,
    pub default_owner: String,
    pub default_repo: String,
}

impl ::std::default::Default for Config {
    fn default() -> Self {
        Self {
            github_access_token: String::from(""),
            default_owner: String::from(""),
            default_repo: String::from(""),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(confy::load(APP_NAME, None)?)
    }

    pub fn store(&self) -> Result<()> {
        Ok(confy::store(APP_NAME, None, self)?)
    }

    pub fn file_path() -> Result<std::path::PathBuf> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Applies non-empty values and reports whether anything changed.
    pub fn update(
        &mut self,
        token: Option<String>,
        owner: Option<String>,
        repo: Option<String>,
    ) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut self.github_access_token, token),
            (&mut self.default_owner, owner),
            (&mut self.default_repo, repo),
        ] {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                if *slot != value {
                    *slot = value;
                    changed = true;
                }
            }
        }
        changed
    }

    /// Flag or environment value first, then the stored token.
    pub fn token(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|t| !t.trim().is_empty())
            .or_else(|| Some(self.github_access_token.clone()).filter(|t| !t.is_empty()))
    }

    pub fn masked_token(&self) -> String {
        let token = &self.github_access_token;
        match token.chars().count() {
            0 => "<not set>".to_string(),
            n if n <= 4 => "*".repeat(n),
            n => {
                let tail: String = token.chars().skip(n - 4).collect();
                format!("{}{}", "*".repeat(n - 4), tail)
            }
        }
    }
}
