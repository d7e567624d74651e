use super::pull_request_handler::PullRequestHandler;
use crate::bitbucket::bitbucket_client::BitbucketClient;

pub struct RepositoryHandler<'a> {
    client: &'a BitbucketClient,
    project_key: String,
    repository_slug: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(
        client: &'a BitbucketClient,
        project_key: impl Into<String>,
        repository_slug: impl Into<String>,
    ) -> Self {
        RepositoryHandler {
            client,
            project_key: project_key.into(),
            repository_slug: repository_slug.into(),
        }
    }

    pub fn pull_requests(&self) -> PullRequestHandler<'a> {
        PullRequestHandler::new(self.client, &self.project_key, &self.repository_slug)
    }
}
