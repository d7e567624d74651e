use crate::bitbucket::{
    bitbucket_client::BitbucketClient, builder::create_pull_request_builder::CreatePullRequestBuilder,
};

pub struct PullRequestHandler<'a> {
    client: &'a BitbucketClient,
    project_key: String,
    repository_slug: String,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(
        client: &'a BitbucketClient,
        project_key: impl Into<String>,
        repository_slug: impl Into<String>,
    ) -> Self {
        PullRequestHandler {
            client,
            project_key: project_key.into(),
            repository_slug: repository_slug.into(),
        }
    }

    pub fn create(&self) -> CreatePullRequestBuilder<'a> {
        CreatePullRequestBuilder::new(self.client, &self.project_key, &self.repository_slug)
    }
}
