use crate::{
    bitbucket::{
        bitbucket_client::BitbucketClient,
        request::{PullRequestRequest, RefRequest, ReviewerRequest},
        BuilderExecutor,
    },
    error::Result,
};
use serde_json::Value;

pub struct CreatePullRequestBuilder<'a> {
    client: &'a BitbucketClient,
    pub project_key: String,
    pub repository_slug: String,
    pub title: String,
    pub description: Option<String>,
    pub from_branch: String,
    pub to_branch: String,
    pub reviewers: Option<String>,
}

impl<'a> CreatePullRequestBuilder<'a> {
    pub fn new(
        client: &'a BitbucketClient,
        project_key: impl Into<String>,
        repository_slug: impl Into<String>,
    ) -> Self {
        CreatePullRequestBuilder {
            client,
            project_key: project_key.into(),
            repository_slug: repository_slug.into(),
            title: String::new(),
            description: None,
            from_branch: String::new(),
            to_branch: String::new(),
            reviewers: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = description.map(Into::into);
        self
    }

    pub fn from_branch(mut self, from_branch: impl Into<String>) -> Self {
        self.from_branch = from_branch.into();
        self
    }

    pub fn to_branch(mut self, to_branch: impl Into<String>) -> Self {
        self.to_branch = to_branch.into();
        self
    }

    /// Comma separated usernames.
    pub fn reviewers(mut self, reviewers: Option<impl Into<String>>) -> Self {
        self.reviewers = reviewers.map(Into::into);
        self
    }

    fn request(&self) -> PullRequestRequest {
        PullRequestRequest::new(
            &self.title,
            self.description.clone(),
            RefRequest::new(&self.from_branch, &self.project_key, &self.repository_slug),
            RefRequest::new(&self.to_branch, &self.project_key, &self.repository_slug),
            ReviewerRequest::parse_list(self.reviewers.as_deref().unwrap_or_default()),
        )
    }
}

impl BuilderExecutor for CreatePullRequestBuilder<'_> {
    type Output = Value;

    async fn execute(self) -> Result<Self::Output> {
        let request = self.request();

        self.client
            .create_pull_request(&self.project_key, &self.repository_slug, &request)
            .await
    }
}
