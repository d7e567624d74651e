use std::{collections::HashMap, fmt::Display};

/// Named pull request parameters, in the order they are prompted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Hostname,
    ApiKey,
    ProjectKey,
    RepositorySlug,
    Title,
    Description,
    FromBranch,
    ToBranch,
    Reviewers,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Hostname,
        Field::ApiKey,
        Field::ProjectKey,
        Field::RepositorySlug,
        Field::Title,
        Field::Description,
        Field::FromBranch,
        Field::ToBranch,
        Field::Reviewers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Hostname => "hostname",
            Field::ApiKey => "apiKey",
            Field::ProjectKey => "projectKey",
            Field::RepositorySlug => "repositorySlug",
            Field::Title => "title",
            Field::Description => "description",
            Field::FromBranch => "fromBranch",
            Field::ToBranch => "toBranch",
            Field::Reviewers => "reviewers",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Description | Field::Reviewers)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The values collected for one invocation.
///
/// Empty values are never stored, so `contains` means "supplied and non-empty".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parameters {
    values: HashMap<Field, String>,
}

impl Parameters {
    pub fn new() -> Self {
        Parameters::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    /// Sets `field` only if it was not supplied already.
    pub fn set_if_absent(&mut self, field: Field, value: Option<String>) {
        if self.contains(field) {
            return;
        }
        if let Some(value) = value {
            self.set(field, value);
        }
    }

    pub fn missing(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|field| !self.contains(*field))
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (field, value) in iter {
            params.set(field, value);
        }
        params
    }
}
