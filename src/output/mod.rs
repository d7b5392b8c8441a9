// ABOUTME: Output handler module for rendered notification formatting and persistence
// ABOUTME: Handles HTML/JSON/text formatting and output to files or stdout

pub mod config;
pub mod error;
pub mod formatter;
pub mod writer;

use async_trait::async_trait;
use std::collections::HashMap;

use self::config::OutputConfig;
use self::error::{OutputError, Result};
use self::formatter::{HtmlFormatter, JsonFormatter, OutputFormatter, TextFormatter};
use self::writer::{FileWriter, OutputWriter, StdoutWriter};
use crate::notification::RenderedNotification;

pub struct OutputHandler {
    formatters: HashMap<String, Box<dyn OutputFormatter>>,
    writers: HashMap<String, Box<dyn OutputWriter>>,
}

#[async_trait]
pub trait OutputProcessor: Send + Sync {
    async fn process_notification(
        &self,
        rendered: &RenderedNotification,
        config: &OutputConfig,
    ) -> Result<()>;
}

impl OutputHandler {
    pub fn new() -> Self {
        let mut handler = Self {
            formatters: HashMap::new(),
            writers: HashMap::new(),
        };

        // Register built-in formatters
        handler.register_formatter("html", Box::new(HtmlFormatter));
        handler.register_formatter("json", Box::new(JsonFormatter::new_pretty()));
        handler.register_formatter("json-compact", Box::new(JsonFormatter::new()));
        handler.register_formatter("text", Box::new(TextFormatter));

        // Register built-in writers
        handler.register_writer("stdout", Box::new(StdoutWriter::new()));
        handler.register_writer("file", Box::new(FileWriter::new()));

        handler
    }

    pub fn register_formatter(&mut self, name: &str, formatter: Box<dyn OutputFormatter>) {
        self.formatters.insert(name.to_string(), formatter);
    }

    pub fn register_writer(&mut self, name: &str, writer: Box<dyn OutputWriter>) {
        self.writers.insert(name.to_string(), writer);
    }

    pub async fn output_notification(
        &self,
        rendered: &RenderedNotification,
        config: &OutputConfig,
    ) -> Result<()> {
        let formatter =
            self.formatters
                .get(&config.format)
                .ok_or_else(|| OutputError::FormatterNotFound {
                    format: config.format.clone(),
                })?;

        let formatted_output = formatter.format_notification(rendered, config).await?;

        for destination in &config.destinations {
            if let Some(writer) = self.writers.get(&destination.writer_type) {
                writer.write(&formatted_output, destination).await?;
            } else {
                return Err(OutputError::WriterNotFound {
                    writer_type: destination.writer_type.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn list_formats(&self) -> Vec<&str> {
        self.formatters.keys().map(|k| k.as_str()).collect()
    }
}

#[async_trait]
impl OutputProcessor for OutputHandler {
    async fn process_notification(
        &self,
        rendered: &RenderedNotification,
        config: &OutputConfig,
    ) -> Result<()> {
        self.output_notification(rendered, config).await
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
