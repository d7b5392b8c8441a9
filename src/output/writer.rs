// ABOUTME: Output writers for different destinations (stdout, files)
// ABOUTME: Handles writing formatted previews to their configured destinations

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::config::{FileWriterConfig, OutputDestination, StdoutWriterConfig};
use super::error::{OutputError, Result};

#[async_trait]
pub trait OutputWriter: Send + Sync {
    async fn write(&self, content: &str, destination: &OutputDestination) -> Result<()>;
}

pub struct StdoutWriter;

pub struct FileWriter;

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for StdoutWriter {
    async fn write(&self, content: &str, destination: &OutputDestination) -> Result<()> {
        let config: StdoutWriterConfig = destination
            .get_config()
            .unwrap_or(StdoutWriterConfig { quiet: false });

        if !config.quiet {
            println!("{}", content);
        }

        debug!("Output written to stdout ({} chars)", content.len());
        Ok(())
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for FileWriter {
    async fn write(&self, content: &str, destination: &OutputDestination) -> Result<()> {
        let config: FileWriterConfig =
            destination
                .get_config()
                .map_err(|e| OutputError::ConfigError {
                    message: format!("Invalid file writer config: {}", e),
                })?;

        let output_path = Path::new(&config.path);

        if config.create_dirs {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .await
                        .map_err(|e| OutputError::WriteError {
                            message: format!(
                                "Failed to create directory {}: {}",
                                parent.display(),
                                e
                            ),
                        })?;
                }
            }
        }

        fs::write(output_path, content)
            .await
            .map_err(|e| OutputError::WriteError {
                message: format!("Failed to write file {}: {}", config.path, e),
            })?;

        debug!("Output written to {}", config.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_writer_creates_directories() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("previews/out.html");
        let destination = OutputDestination::new_file(nested.to_string_lossy());

        FileWriter::new()
            .write("<p>preview</p>", &destination)
            .await
            .unwrap();

        let written = tokio::fs::read_to_string(&nested).await.unwrap();
        assert_eq!(written, "<p>preview</p>");
    }

    #[tokio::test]
    async fn test_file_writer_rejects_missing_path() {
        let destination = OutputDestination {
            writer_type: "file".to_string(),
            config: std::collections::HashMap::new(),
        };

        let result = FileWriter::new().write("x", &destination).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stdout_writer_accepts_default_config() {
        let destination = OutputDestination::new_stdout();
        StdoutWriter::new().write("preview", &destination).await.unwrap();
    }
}
