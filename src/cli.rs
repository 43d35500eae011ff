use clap::{Args, Parser, Subcommand};

use crate::github::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Github API base url
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetches the list of issues
    List {
        #[command(flatten)]
        target: Target,

        /// Pick an issue from the list and open it in the browser
        #[arg(short, long)]
        interactive: bool,
    },

    /// Create an issue
    Create(CreateArgs),

    /// Show or update the stored configuration
    Config {
        /// Github access token
        #[arg(long)]
        token: Option<String>,

        /// Default repo owner
        #[arg(long)]
        owner: Option<String>,

        /// Default repo name
        #[arg(long)]
        repo: Option<String>,

        /// Print the config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug)]
pub struct Target {
    /// Github repo owner
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Github repo name
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Github access token
    #[arg(long, env = "GITHUB_PAT", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub target: Target,

    /// Issue title (required)
    #[arg(short, long)]
    pub title: String,

    /// Issue body description, prompted for when empty
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Comma-separated list of assignees
    #[arg(short, long, value_delimiter = ',')]
    pub assignees: Vec<String>,

    /// Comma-separated list of labels
    #[arg(short, long, value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Milestone ID
    #[arg(short, long, default_value_t = 0)]
    pub milestone: u64,

    /// Open the new issue in the browser
    #[arg(long)]
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_flags() {
        let cli = Cli::try_parse_from([
            "gh-issue", "create", "-o", "octocat", "-r", "hello", "-t", "Bug", "-a", "a,b", "-l",
            "x", "-l", "y", "-m", "7",
        ])
        .unwrap();

        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.target.owner.as_deref(), Some("octocat"));
        assert_eq!(args.target.repo.as_deref(), Some("hello"));
        assert_eq!(args.title, "Bug");
        assert_eq!(args.body, "");
        assert_eq!(args.assignees, vec!["a", "b"]);
        assert_eq!(args.labels, vec!["x", "y"]);
        assert_eq!(args.milestone, 7);
    }

    #[test]
    fn create_requires_title() {
        let err = Cli::try_parse_from(["gh-issue", "create", "-o", "a", "-r", "b"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn token_flag_on_both_commands() {
        let cli =
            Cli::try_parse_from(["gh-issue", "list", "-o", "a", "-r", "b", "--token", "t1"]).unwrap();
        let Command::List { target, .. } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(target.token.as_deref(), Some("t1"));

        let cli = Cli::try_parse_from(["gh-issue", "create", "-t", "Bug", "--token", "t2"]).unwrap();
        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.target.token.as_deref(), Some("t2"));
    }

    #[test]
    fn list_flags() {
        let cli = Cli::try_parse_from(["gh-issue", "list", "-o", "a", "-r", "b", "-i"]).unwrap();
        match cli.command {
            Command::List {
                target,
                interactive,
            } => {
                assert_eq!(target.owner.as_deref(), Some("a"));
                assert!(interactive);
            }
            _ => panic!("expected list"),
        }
    }
}
