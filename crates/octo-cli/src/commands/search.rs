//! `octo search issues` command - run one issue search and print the page.

use std::path::PathBuf;

use anyhow::{Context, Result};
use octo_github::{Auth, ConfigFile, Configuration, Error, GitHubClient, IssueSearch};
use tracing::debug;

use super::{GlobalArgs, IssuesArgs};
use crate::output;
use crate::services::{IssueSearchReport, SearchService};

/// Run the search issues command.
pub fn run_issues(global: &GlobalArgs, args: &IssuesArgs) -> Result<()> {
    let config = load_configuration(global, args.anonymous)?;
    let client = GitHubClient::with_config(config).context("Failed to create GitHub client")?;
    let service = SearchService::new(&client);

    let search = build_search(args);
    debug!(query = %search.query(), "running issue search");

    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(service.search_issues(&search))?;

    if args.json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Translate command-line filters into search filters.
pub fn build_search(args: &IssuesArgs) -> IssueSearch {
    let mut search = IssueSearch::new()
        .openness(args.state)
        .archived(args.archived);

    search = if args.no_type {
        search.without_type()
    } else {
        search.kind(args.kind.as_str())
    };
    if let Some(repo) = &args.repo {
        search = search.repo(repo.as_str());
    }
    if let Some(user) = &args.involves {
        search = search.involves(user.as_str());
    }
    if let Some(user) = &args.author {
        search = search.author(user.as_str());
    }

    search
}

/// Build the client configuration from credentials, config file and flags.
///
/// Precedence for the API URL: `--api-url`, then the config file, then
/// github.com.
fn load_configuration(global: &GlobalArgs, anonymous: bool) -> Result<Configuration> {
    let token = if anonymous {
        None
    } else {
        match Auth::auto().resolve() {
            Ok(token) => token,
            Err(Error::NoToken | Error::Io(_)) => {
                output::warn("No GitHub token found - searching anonymously");
                None
            }
            Err(e) => return Err(e).context("Failed to resolve GitHub token"),
        }
    };

    let path = config_path(global);
    let file = match &path {
        Some(path) => ConfigFile::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigFile::default(),
    };

    let mut config = file.apply(Configuration::from_token(token));
    if let Some(url) = &global.api_url {
        config = config.with_api_url(url.as_str());
    }

    debug!(api_url = config.api_url(), "configuration ready");
    Ok(config)
}

/// Config file location: `--config`/`OCTO_CONFIG`, else `<config dir>/octo/config.toml`.
fn config_path(global: &GlobalArgs) -> Option<PathBuf> {
    global
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("octo").join("config.toml")))
}

/// Print the report in human-readable format.
fn print_report(report: &IssueSearchReport) {
    if report.results.is_empty() {
        output::info(&format!("No issues match `{}`", report.query));
    } else {
        for issue in &report.results {
            output::essential(&output::issue_line(issue));
        }
        output::hr();
        output::info(&report.summary());
    }

    if report.results.incomplete_results {
        output::warn("Search timed out on GitHub - results may be incomplete");
    }
}

/// Print the report as JSON.
fn print_json(report: &IssueSearchReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    output::essential(&json_output);
    Ok(())
}
