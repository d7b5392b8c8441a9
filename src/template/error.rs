// ABOUTME: Error types for template engine operations
// ABOUTME: Defines specific error types for conditional evaluation and nesting checks

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unmatched '{{% if %}}' tag at byte {position}")]
    UnmatchedIf { position: usize },

    #[error("Unterminated '{{% if %}}' tag at byte {position}")]
    UnterminatedTag { position: usize },

    #[error("'{{% else %}}' tag outside any '{{% if %}}' block at byte {position}")]
    DanglingElse { position: usize },

    #[error("'{{% endif %}}' tag outside any '{{% if %}}' block at byte {position}")]
    DanglingEndif { position: usize },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
