use serde::Serialize;

const OPEN_STATE: &str = "OPEN";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRequest {
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    pub open: bool,
    pub closed: bool,
    pub locked: bool,
    pub from_ref: RefRequest,
    pub to_ref: RefRequest,
    pub reviewers: Vec<ReviewerRequest>,
}

impl PullRequestRequest {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        from_ref: RefRequest,
        to_ref: RefRequest,
        reviewers: Vec<ReviewerRequest>,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            state: OPEN_STATE.to_owned(),
            open: true,
            closed: false,
            locked: false,
            from_ref,
            to_ref,
            reviewers,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RefRequest {
    pub id: String,
    pub repository: RepositoryRequest,
}

impl RefRequest {
    pub fn new(
        branch: impl Into<String>,
        project_key: impl Into<String>,
        repository_slug: impl Into<String>,
    ) -> Self {
        let branch: String = branch.into();

        Self {
            id: format!("refs/heads/{}", branch),
            repository: RepositoryRequest {
                slug: repository_slug.into(),
                name: None,
                project: ProjectRequest {
                    key: project_key.into(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RepositoryRequest {
    pub slug: String,
    pub name: Option<String>,
    pub project: ProjectRequest,
}

#[derive(Debug, Serialize)]
pub struct ProjectRequest {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewerRequest {
    pub user: UserRequest,
}

#[derive(Debug, Serialize)]
pub struct UserRequest {
    pub name: String,
}

impl ReviewerRequest {
    pub fn new(username: &str) -> Self {
        Self {
            user: UserRequest {
                name: username.to_lowercase(),
            },
        }
    }

    /// Splits a comma separated list of usernames. Blank entries are skipped.
    pub fn parse_list(reviewers: &str) -> Vec<ReviewerRequest> {
        reviewers
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ReviewerRequest::new)
            .collect()
    }
}
