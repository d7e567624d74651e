use crate::params::Field;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arguments supplied, ({}) need to be specified.", join_fields(.missing))]
    Validation { missing: Vec<Field> },
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to parse response")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Cannot read config file {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        cause: anyhow::Error,
    },
    #[error("Repository metadata unavailable: {0}")]
    MetadataUnavailable(String),
    #[error("Editor failed: {0}")]
    Editor(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
