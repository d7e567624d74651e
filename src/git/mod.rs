use crate::error::{Error, Result};
use git2::Repository;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static REMOTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ssh://git@([^:/]+):.*/([^/]+)/([^/]+)\.[^./]+$").expect("valid remote url regex")
});

const ORIGIN_URL_KEY: &str = "remote.origin.url";
const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Best-effort defaults taken from the local repository.
pub trait RepositoryInfo {
    fn hostname(&self) -> Result<String>;
    fn project_key(&self) -> Result<String>;
    fn repository_slug(&self) -> Result<String>;
    fn current_branch(&self) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub hostname: String,
    pub project_key: String,
    pub repository_slug: String,
}

impl RemoteUrl {
    pub fn parse(url: &str) -> Option<RemoteUrl> {
        let captures = REMOTE_URL.captures(url.trim())?;

        Some(RemoteUrl {
            hostname: captures[1].to_owned(),
            project_key: captures[2].to_owned(),
            repository_slug: captures[3].to_owned(),
        })
    }
}

/// Snapshot of the repository state, read once at startup.
#[derive(Debug, Default, Clone)]
pub struct RepositoryMetadata {
    remote_url: Option<String>,
    branch: Option<String>,
}

impl RepositoryMetadata {
    /// Reads the repository containing `path`. Never fails; whatever
    /// cannot be read is left empty.
    pub fn discover(path: impl AsRef<Path>) -> RepositoryMetadata {
        let repo = match Repository::discover(path) {
            Ok(repo) => repo,
            Err(err) => {
                log::debug!("no git repository found: {}", err.message());
                return RepositoryMetadata::default();
            }
        };

        let remote_url = repo
            .config()
            .and_then(|config| config.get_string(ORIGIN_URL_KEY))
            .map_err(|err| log::debug!("cannot read {}: {}", ORIGIN_URL_KEY, err.message()))
            .ok();

        let branch = current_branch(&repo)
            .map_err(|err| log::debug!("cannot read current branch: {}", err))
            .ok();

        RepositoryMetadata { remote_url, branch }
    }

    fn remote(&self) -> Result<RemoteUrl> {
        let url = self
            .remote_url
            .as_deref()
            .ok_or_else(|| Error::MetadataUnavailable("no origin remote".to_owned()))?;

        RemoteUrl::parse(url).ok_or_else(|| {
            Error::MetadataUnavailable(format!("unrecognised remote url {}", url))
        })
    }
}

impl RepositoryInfo for RepositoryMetadata {
    fn hostname(&self) -> Result<String> {
        Ok(self.remote()?.hostname)
    }

    fn project_key(&self) -> Result<String> {
        Ok(self.remote()?.project_key)
    }

    fn repository_slug(&self) -> Result<String> {
        Ok(self.remote()?.repository_slug)
    }

    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| Error::MetadataUnavailable("no current branch".to_owned()))
    }
}

// HEAD is read as a symbolic ref so unborn branches still resolve.
fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo
        .find_reference("HEAD")
        .map_err(|err| Error::MetadataUnavailable(err.message().to_owned()))?;

    head.symbolic_target()
        .and_then(|target| target.strip_prefix(BRANCH_REF_PREFIX))
        .map(str::to_owned)
        .ok_or_else(|| Error::MetadataUnavailable("HEAD is detached".to_owned()))
}
