use std::io::Write;

use log::{debug, info};

use crate::cli::{Cli, Command, CreateArgs};
use crate::error::{IssueError, Result};
use crate::github::{GitHubClient, IssueApi};
use crate::interact::{Console, Interaction};
use crate::models::{Config, NewIssue, RepoRef};
use crate::spinner;

pub const NO_ISSUES: &str = "No issues found.";
pub const CREATED: &str = "Issue created successfully!";

pub async fn run(cli: Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let mut console = Console;

    match cli.command {
        Command::List {
            target,
            interactive,
        } => {
            let cfg = Config::load()?;
            let repo = RepoRef::resolve(
                target.owner,
                target.repo,
                &cfg.default_owner,
                &cfg.default_repo,
            )?;
            let client = GitHubClient::new(cli.api_url, cfg.token(target.token));
            list(&client, &repo, &mut stdout, &mut console, interactive).await
        }
        Command::Create(args) => {
            let issue = draft(&args)?;
            let cfg = Config::load()?;
            let repo = RepoRef::resolve(
                args.target.owner,
                args.target.repo,
                &cfg.default_owner,
                &cfg.default_repo,
            )?;
            let token = cfg
                .token(args.target.token)
                .ok_or(IssueError::MissingToken)?;
            let client = GitHubClient::new(cli.api_url, Some(token));
            create(&client, &repo, issue, &mut stdout, &mut console, args.open).await
        }
        Command::Config {
            token,
            owner,
            repo,
            path,
        } => config(token, owner, repo, path, &mut stdout),
    }
}

/// Builds the payload from the flags. The title check runs before anything
/// touches the config file, the terminal or the network.
pub fn draft(args: &CreateArgs) -> Result<NewIssue> {
    Ok(NewIssue::new(args.title.as_str())?
        .body(args.body.as_str())
        .assignees(args.assignees.clone())
        .labels(args.labels.clone())
        .milestone(args.milestone))
}

pub async fn list<A, W>(
    api: &A,
    repo: &RepoRef,
    out: &mut W,
    interaction: &mut dyn Interaction,
    interactive: bool,
) -> Result<()>
where
    A: IssueApi + ?Sized,
    W: Write,
{
    let pb = spinner::start("Fetching issues...");
    let issues = api.list_issues(repo).await;
    pb.finish_and_clear();
    let issues = issues?;

    if issues.is_empty() {
        writeln!(out, "{}", NO_ISSUES)?;
        return Ok(());
    }

    for issue in &issues {
        writeln!(out, "{}", issue)?;
    }
    out.flush()?;

    if interactive {
        match interaction.select_issue(&issues)? {
            Some(selection) => {
                let url = &issues[selection].html_url;
                debug!("Opening {}", url);
                interaction.open_in_browser(url)?;
            }
            None => debug!("Selection cancelled"),
        }
    }

    Ok(())
}

pub async fn create<A, W>(
    api: &A,
    repo: &RepoRef,
    mut issue: NewIssue,
    out: &mut W,
    interaction: &mut dyn Interaction,
    open: bool,
) -> Result<()>
where
    A: IssueApi + ?Sized,
    W: Write,
{
    if issue.has_blank_body() {
        issue.body = interaction.issue_body()?;
    }

    let pb = spinner::start("Creating issue...");
    let created = api.create_issue(repo, &issue).await;
    pb.finish_and_clear();
    let created = created?;

    writeln!(out, "{}", CREATED)?;
    writeln!(out, "{}", created)?;

    if open && !created.html_url.is_empty() {
        interaction.open_in_browser(&created.html_url)?;
    }

    Ok(())
}

pub fn config<W: Write>(
    token: Option<String>,
    owner: Option<String>,
    repo: Option<String>,
    path: bool,
    out: &mut W,
) -> Result<()> {
    if path {
        writeln!(out, "{}", Config::file_path()?.display())?;
        return Ok(());
    }

    let mut cfg = Config::load()?;
    if cfg.update(token, owner, repo) {
        cfg.store()?;
        info!("Configuration updated");
    }

    writeln!(out, "token: {}", cfg.masked_token())?;
    writeln!(out, "owner: {}", cfg.default_owner)?;
    writeln!(out, "repo:  {}", cfg.default_repo)?;
    Ok(())
}
