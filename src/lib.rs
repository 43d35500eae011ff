//! List and create Github issues from the command line.

pub mod cli;
pub mod commands;
pub mod error;
pub mod github;
pub mod interact;
pub mod models;
pub mod spinner;

pub use error::{IssueError, Result};
