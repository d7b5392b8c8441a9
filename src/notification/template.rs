// ABOUTME: Notification template document structures and parsing
// ABOUTME: Defines the NotificationTemplate YAML format and its validation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use super::error::{NotificationError, Result};

/// A notification template document: the subject line and HTML body of one
/// email, both of which may use conditional blocks and `{{ }}` variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub name: String,
    pub description: Option<String>,
    pub subject: String,
    pub html: String,
    #[serde(default)]
    pub variables: IndexMap<String, String>,
}

impl NotificationTemplate {
    /// Parse a template document from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NotificationError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Parse a template document from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let template: NotificationTemplate =
            serde_yaml::from_str(content).map_err(NotificationError::YamlError)?;
        template.validate_structure()?;
        Ok(template)
    }

    /// Validate basic document structure
    fn validate_structure(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NotificationError::MissingField("name".to_string()));
        }

        if self.subject.trim().is_empty() {
            return Err(NotificationError::InvalidTemplate {
                name: self.name.clone(),
                reason: "subject cannot be empty".to_string(),
            });
        }

        if self.html.trim().is_empty() {
            return Err(NotificationError::InvalidTemplate {
                name: self.name.clone(),
                reason: "html body cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Check conditional tag nesting in the subject and html fields
    pub fn check_syntax(&self) -> Result<()> {
        let engine = crate::template::TemplateEngine::new();

        engine
            .check(&self.subject)
            .map_err(|source| NotificationError::SyntaxError {
                field: "subject".to_string(),
                source,
            })?;

        engine
            .check(&self.html)
            .map_err(|source| NotificationError::SyntaxError {
                field: "html".to_string(),
                source,
            })?;

        Ok(())
    }

    /// All variable names referenced across subject and html
    pub fn referenced_variables(&self) -> Vec<String> {
        let engine = crate::template::TemplateEngine::new();
        let mut names = engine.referenced_variables(&self.subject);

        for name in engine.referenced_variables(&self.html) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Convert the document back to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(NotificationError::YamlError)
    }

    /// Save the document to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path.as_ref(), yaml).map_err(NotificationError::IoError)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NotificationParser;

impl NotificationParser {
    pub fn new() -> Self {
        Self
    }

    pub async fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<NotificationTemplate> {
        let content = fs::read_to_string(path.as_ref())
            .await
            .map_err(NotificationError::IoError)?;
        self.parse_string(&content)
    }

    pub fn parse_string(&self, content: &str) -> Result<NotificationTemplate> {
        NotificationTemplate::from_yaml(content)
    }
}

impl Default for NotificationParser {
    fn default() -> Self {
        Self::new()
    }
}
