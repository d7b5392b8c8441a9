// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for setting up test templates and branding files

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

pub struct TestTemplateBuilder {
    name: String,
    description: String,
    subject: String,
    html: String,
    variables: Vec<(String, String)>,
}

impl TestTemplateBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("Test template: {}", name),
            subject: "Update from {{ branding.company_name }}".to_string(),
            html: "<p>Hello {{ candidate_name }}</p>".to_string(),
            variables: Vec::new(),
        }
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    pub fn with_html(mut self, html: &str) -> Self {
        self.html = html.to_string();
        self
    }

    pub fn with_variable(mut self, key: &str, value: &str) -> Self {
        self.variables.push((key.to_string(), value.to_string()));
        self
    }

    pub async fn write_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.generate_yaml()).await?;
        Ok(())
    }

    fn generate_yaml(&self) -> String {
        let mut yaml = format!(
            "name: {}\ndescription: \"{}\"\nsubject: \"{}\"\n",
            self.name,
            self.description,
            self.subject.replace('"', "\\\"")
        );

        yaml.push_str("html: |\n");
        for line in self.html.lines() {
            yaml.push_str("  ");
            yaml.push_str(line);
            yaml.push('\n');
        }

        if !self.variables.is_empty() {
            yaml.push_str("\nvariables:\n");
            for (key, value) in &self.variables {
                yaml.push_str(&format!("  {}: \"{}\"\n", key, value));
            }
        }

        yaml
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn template_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.yaml", name))
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}_preview.html", name))
    }

    pub async fn create_template_file(&self, name: &str, builder: &TestTemplateBuilder) -> PathBuf {
        let template_file = self.template_file(name);
        builder
            .write_to_file(&template_file)
            .await
            .expect("Failed to write template file");
        template_file
    }

    pub async fn create_branding_file(&self, yaml: &str) -> PathBuf {
        let branding_file = self.path().join("branding.yaml");
        fs::write(&branding_file, yaml)
            .await
            .expect("Failed to write branding file");
        branding_file
    }
}

pub fn sample_branding_yaml() -> &'static str {
    r#"
company_name: "Oneo"
logo_url: "https://cdn.oneo.dev/logo.png"
website_url: "https://oneo.dev"
social:
  linkedin_url: "https://linkedin.com/company/oneo"
footer_text: "Oneo, Amsterdam"
sender_name: "The Oneo team"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_builder_yaml() {
        let builder = TestTemplateBuilder::new("builder_test")
            .with_html("<p>line one</p>\n<p>line two</p>")
            .with_variable("candidate_name", "Robin");

        let yaml = builder.generate_yaml();

        assert!(yaml.contains("name: builder_test"));
        assert!(yaml.contains("html: |"));
        assert!(yaml.contains("  <p>line two</p>"));
        assert!(yaml.contains("candidate_name: \"Robin\""));
    }

    #[test]
    fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());

        let template_file = env.template_file("test");
        assert!(template_file.to_string_lossy().contains("test.yaml"));
    }
}
