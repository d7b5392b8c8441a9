// ABOUTME: Error types for output handling operations
// ABOUTME: Defines specific error types for formatting and writing rendered notifications

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Output formatter not found: {format}")]
    FormatterNotFound { format: String },

    #[error("Output writer not found: {writer_type}")]
    WriterNotFound { writer_type: String },

    #[error("Invalid output configuration: {message}")]
    ConfigError { message: String },

    #[error("Failed to write output: {message}")]
    WriteError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerializationError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
