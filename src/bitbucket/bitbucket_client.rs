use super::{handler::repository_handler::RepositoryHandler, request::PullRequestRequest};
use crate::{error::Result, http::Client};
use serde_json::Value;

const API_PATH: &str = "rest/api/1.0";

pub struct BitbucketClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl BitbucketClient {
    /// Client for `https://<hostname>`.
    pub fn new(hostname: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        BitbucketClient::with_base_url(format!("https://{}", hostname.as_ref()), api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        BitbucketClient {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn repo(
        &self,
        project_key: impl Into<String>,
        repository_slug: impl Into<String>,
    ) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, project_key, repository_slug)
    }

    pub fn pull_requests_url(&self, project_key: &str, repository_slug: &str) -> String {
        format!(
            "{}/{}/projects/{}/repos/{}/pull-requests",
            self.base_url, API_PATH, project_key, repository_slug
        )
    }

    pub(super) async fn create_pull_request(
        &self,
        project_key: &str,
        repository_slug: &str,
        request: &PullRequestRequest,
    ) -> Result<Value> {
        let uri = self.pull_requests_url(project_key, repository_slug);
        log::info!("Opening PR to {}", uri);

        let response = self.http.post_json(&uri, &self.api_key, request).await?;

        log::info!("PR opened at {}", uri);
        Ok(response)
    }
}
