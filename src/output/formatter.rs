// ABOUTME: Output formatters for rendered notifications (HTML, JSON, text)
// ABOUTME: Handles serialization and presentation of preview results

use async_trait::async_trait;

use super::config::OutputConfig;
use super::error::{OutputError, Result};
use crate::notification::RenderedNotification;

#[async_trait]
pub trait OutputFormatter: Send + Sync {
    async fn format_notification(
        &self,
        rendered: &RenderedNotification,
        config: &OutputConfig,
    ) -> Result<String>;
}

/// Emits the raw HTML body, the form fed to a preview surface
pub struct HtmlFormatter;

/// Emits the full envelope (subject, body, metadata) as JSON
pub struct JsonFormatter {
    pretty: bool,
}

/// Emits a plain-text summary with the subject line and body
pub struct TextFormatter;

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }
}

#[async_trait]
impl OutputFormatter for HtmlFormatter {
    async fn format_notification(
        &self,
        rendered: &RenderedNotification,
        _config: &OutputConfig,
    ) -> Result<String> {
        Ok(rendered.html.clone())
    }
}

#[async_trait]
impl OutputFormatter for JsonFormatter {
    async fn format_notification(
        &self,
        rendered: &RenderedNotification,
        _config: &OutputConfig,
    ) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(rendered).map_err(OutputError::SerializationError)
        } else {
            serde_json::to_string(rendered).map_err(OutputError::SerializationError)
        }
    }
}

#[async_trait]
impl OutputFormatter for TextFormatter {
    async fn format_notification(
        &self,
        rendered: &RenderedNotification,
        _config: &OutputConfig,
    ) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Template: {}\n", rendered.template_name));
        output.push_str(&format!("Subject: {}\n", rendered.subject));

        if !rendered.metadata.unresolved.is_empty() {
            output.push_str(&format!(
                "Unresolved: {}\n",
                rendered.metadata.unresolved.join(", ")
            ));
        }

        output.push('\n');
        output.push_str(&rendered.html);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::RenderMetadata;
    use chrono::Utc;

    fn rendered() -> RenderedNotification {
        RenderedNotification {
            template_name: "welcome".to_string(),
            subject: "Welcome to Oneo".to_string(),
            html: "<p>Hello</p>".to_string(),
            metadata: RenderMetadata {
                render_id: "r-1".to_string(),
                rendered_at: Utc::now(),
                variable_count: 2,
                unresolved: vec!["candidate_name".to_string()],
            },
        }
    }

    #[tokio::test]
    async fn test_html_formatter_emits_body_only() {
        let formatted = HtmlFormatter
            .format_notification(&rendered(), &OutputConfig::default())
            .await
            .unwrap();
        assert_eq!(formatted, "<p>Hello</p>");
    }

    #[tokio::test]
    async fn test_json_formatter_round_trips() {
        let formatted = JsonFormatter::new_pretty()
            .format_notification(&rendered(), &OutputConfig::default())
            .await
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed["template_name"], "welcome");
        assert_eq!(parsed["metadata"]["unresolved"][0], "candidate_name");
    }

    #[tokio::test]
    async fn test_text_formatter_includes_subject_and_unresolved() {
        let formatted = TextFormatter
            .format_notification(&rendered(), &OutputConfig::default())
            .await
            .unwrap();

        assert!(formatted.contains("Subject: Welcome to Oneo"));
        assert!(formatted.contains("Unresolved: candidate_name"));
        assert!(formatted.ends_with("<p>Hello</p>"));
    }
}
