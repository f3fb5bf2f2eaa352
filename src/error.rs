use thiserror::Error;

pub type HookResult<T> = Result<T, HookError>;

#[derive(Error, Debug, Clone)]
pub enum HookError {
    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("Empty document: no elements found")]
    EmptyDocument,

    #[error("Duplicate id '{id}': element ids must be unique within the document")]
    DuplicateId { id: String },

    #[error("Invalid id '{id}': ids must start with a letter and contain only letters, digits, '-' and '_'")]
    InvalidId { id: String },

    #[error("Unknown element id '{id}'")]
    UnknownElement { id: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_yaml::Error> for HookError {
    fn from(err: serde_yaml::Error) -> Self {
        HookError::YamlError(err.to_string())
    }
}
