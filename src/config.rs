use crate::{
    error::{Error, Result},
    params::{Field, Parameters},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE_NAME: &str = ".open-pr.yaml";

/// Parameter values kept in a YAML file, e.g. per repository.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub hostname: Option<String>,
    pub api_key: Option<String>,
    pub project_key: Option<String>,
    pub repository_slug: Option<String>,
    pub to_branch: Option<String>,
    pub reviewers: Option<OneOrMany<String>>,
}

impl Config {
    /// Loads `path`, or `.open-pr.yaml` when no path is given. Only the
    /// implicit file may be absent.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE_NAME), false),
        };

        let config_string = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} found", DEFAULT_CONFIG_FILE_NAME);
                return Ok(Config::default());
            }
            Err(err) => {
                return Err(Error::Config {
                    path,
                    cause: err.into(),
                })
            }
        };

        Config::parse(&config_string).map_err(|cause| Error::Config { path, cause })
    }

    pub fn parse(content: &str) -> anyhow::Result<Config> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yaml::from_str::<Config>(content)?;

        Ok(config)
    }

    /// Fills the fields that were not given on the command line.
    pub fn apply(self, params: &mut Parameters) {
        params.set_if_absent(Field::Hostname, self.hostname);
        params.set_if_absent(Field::ApiKey, self.api_key);
        params.set_if_absent(Field::ProjectKey, self.project_key);
        params.set_if_absent(Field::RepositorySlug, self.repository_slug);
        params.set_if_absent(Field::ToBranch, self.to_branch);
        params.set_if_absent(
            Field::Reviewers,
            self.reviewers.map(|reviewers| Vec::from(reviewers).join(",")),
        );
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(from: OneOrMany<T>) -> Self {
        match from {
            OneOrMany::One(val) => vec![val],
            OneOrMany::Many(vec) => vec,
        }
    }
}
