// ABOUTME: Error types for notification template operations
// ABOUTME: Defines specific error types for document parsing, validation, and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Failed to read template file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },

    #[error("Template syntax error in '{field}': {source}")]
    SyntaxError {
        field: String,
        #[source]
        source: crate::template::TemplateError,
    },
}

pub type Result<T> = std::result::Result<T, NotificationError>;
