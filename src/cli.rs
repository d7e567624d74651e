use crate::params::{Field, Parameters};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Open a pull request on a Bitbucket Server instance.
///
/// Every parameter not given as a flag (or through the config file) is
/// asked for interactively. Hostname, project key, repository slug and
/// source branch default to what the local git repository says.
#[derive(Debug, Parser)]
#[command(name = "open-pr", version, about)]
pub struct Cli {
    /// Server hostname, e.g. git.example.com
    #[arg(long)]
    pub hostname: Option<String>,

    /// Personal access token sent as a bearer token
    #[arg(long = "apiKey", env = "OPEN_PR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Key of the project owning the repository
    #[arg(long = "projectKey")]
    pub project_key: Option<String>,

    /// Repository slug inside the project
    #[arg(long = "repositorySlug")]
    pub repository_slug: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Source branch
    #[arg(long = "fromBranch")]
    pub from_branch: Option<String>,

    /// Destination branch
    #[arg(long = "toBranch")]
    pub to_branch: Option<String>,

    /// Comma separated reviewer usernames
    #[arg(long)]
    pub reviewers: Option<String>,

    /// YAML file with parameter values [default: .open-pr.yaml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Never prompt; fail if a required parameter is missing
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,

    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parameters(&self) -> Parameters {
        [
            (Field::Hostname, &self.hostname),
            (Field::ApiKey, &self.api_key),
            (Field::ProjectKey, &self.project_key),
            (Field::RepositorySlug, &self.repository_slug),
            (Field::Title, &self.title),
            (Field::Description, &self.description),
            (Field::FromBranch, &self.from_branch),
            (Field::ToBranch, &self.to_branch),
            (Field::Reviewers, &self.reviewers),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_ref().map(|value| (field, value.to_owned())))
        .collect()
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}
