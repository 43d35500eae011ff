pub mod config;
pub mod issue;
pub mod repo;

pub use config::Config;
pub use issue::{CreatedIssue, ListIssue, NewIssue};
pub use repo::RepoRef;
