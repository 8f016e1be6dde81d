use thiserror::Error;

use crate::entity::Collection;

#[derive(Error, Debug)]
pub enum ErpStageError {
    #[error("Not in an erpstage project. Run 'erpstage init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .erpstage/ to reinitialize.")]
    AlreadyInitialized,

    #[error("{} key already exists: {key}", collection.singular())]
    DuplicateKey { collection: Collection, key: String },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Please configure at least some accounts, customers, or items first")]
    InsufficientContext,

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("'{0}' replaces existing data. Re-run with --yes to confirm.")]
    ConfirmationRequired(&'static str),

    #[error("No data to export. Add some configuration first.")]
    NothingToExport,

    #[error("No validation issues to export. Run 'erpstage validate' first.")]
    NoIssuesToExport,

    #[error("No record matches id '{0}'")]
    RecordNotFound(String),

    #[error("Id prefix '{0}' matches more than one record")]
    AmbiguousId(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ErpStageError>;
