// ABOUTME: Preview rendering pipeline producing resolved notification emails
// ABOUTME: Assembles the context, renders subject and body, and builds the result envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::branding::BrandingSettings;
use super::error::{NotificationError, Result};
use super::template::NotificationTemplate;
use crate::template::{substitution, RenderContext, TemplateEngine};

/// A fully rendered notification, ready for display or delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedNotification {
    pub template_name: String,
    pub subject: String,
    pub html: String,
    pub metadata: RenderMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMetadata {
    pub render_id: String,
    pub rendered_at: DateTime<Utc>,
    pub variable_count: usize,
    pub unresolved: Vec<String>,
}

pub struct PreviewRenderer {
    engine: TemplateEngine,
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    pub fn with_engine(engine: TemplateEngine) -> Self {
        Self { engine }
    }

    /// Render a template against branding settings and ad-hoc overrides.
    ///
    /// Context precedence, lowest to highest: branding variables, the
    /// template's own defaults, caller overrides.
    pub fn render(
        &self,
        template: &NotificationTemplate,
        branding: &BrandingSettings,
        overrides: &HashMap<String, String>,
    ) -> Result<RenderedNotification> {
        let context = self.build_context(template, branding, overrides);

        let subject = self
            .engine
            .render(&template.subject, &context)
            .map_err(|source| NotificationError::SyntaxError {
                field: "subject".to_string(),
                source,
            })?;

        let html = self
            .engine
            .render(&template.html, &context)
            .map_err(|source| NotificationError::SyntaxError {
                field: "html".to_string(),
                source,
            })?;

        let mut unresolved = substitution::unresolved_variables(&template.subject, &context);
        for name in substitution::unresolved_variables(&template.html, &context) {
            if !unresolved.contains(&name) {
                unresolved.push(name);
            }
        }

        Ok(RenderedNotification {
            template_name: template.name.clone(),
            subject,
            html,
            metadata: RenderMetadata {
                render_id: Uuid::new_v4().to_string(),
                rendered_at: Utc::now(),
                variable_count: context.len(),
                unresolved,
            },
        })
    }

    /// Render against the sample branding table, for previews without a
    /// real settings record
    pub fn render_sample(
        &self,
        template: &NotificationTemplate,
        overrides: &HashMap<String, String>,
    ) -> Result<RenderedNotification> {
        self.render(template, &BrandingSettings::sample(), overrides)
    }

    fn build_context(
        &self,
        template: &NotificationTemplate,
        branding: &BrandingSettings,
        overrides: &HashMap<String, String>,
    ) -> RenderContext {
        let mut context = RenderContext::new();
        context.extend(branding.to_variables());
        context.extend(
            template
                .variables
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        context.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        context
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_template() -> NotificationTemplate {
        NotificationTemplate::from_yaml(
            r#"
name: interview_scheduled
subject: "Interview at {{ branding.company_name }}"
html: |
  {% if branding.logo_url %}<img src="{{ branding.logo_url }}">{% endif %}
  <p>Hi {{ candidate_name }}, see you {{ interview_date }}.</p>
variables:
  candidate_name: "there"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_with_sample_branding() {
        let renderer = PreviewRenderer::new();
        let rendered = renderer
            .render_sample(&sample_template(), &HashMap::new())
            .unwrap();

        assert_eq!(rendered.template_name, "interview_scheduled");
        assert_eq!(rendered.subject, "Interview at Acme Recruiting");
        assert!(rendered.html.contains("acme/logo.png"));
        assert!(rendered.html.contains("Hi there"));
    }

    #[test]
    fn test_override_precedence() {
        let renderer = PreviewRenderer::new();
        let mut overrides = HashMap::new();
        overrides.insert("candidate_name".to_string(), "Robin".to_string());
        overrides.insert("interview_date".to_string(), "on Friday".to_string());

        let rendered = renderer
            .render_sample(&sample_template(), &overrides)
            .unwrap();
        assert!(rendered.html.contains("Hi Robin, see you on Friday."));
    }

    #[test]
    fn test_unresolved_variables_reported() {
        let renderer = PreviewRenderer::new();
        let rendered = renderer
            .render_sample(&sample_template(), &HashMap::new())
            .unwrap();

        // interview_date has no branding value, default, or override
        assert_eq!(rendered.metadata.unresolved, vec!["interview_date"]);
        assert!(!rendered.metadata.render_id.is_empty());
    }

    #[test]
    fn test_missing_branding_field_takes_else_branch() {
        let template = NotificationTemplate::from_yaml(
            r#"
name: plain
subject: s
html: "{% if branding.logo_url %}<img>{% else %}{{ branding.company_name }}{% endif %}"
"#,
        )
        .unwrap();

        let branding = BrandingSettings {
            company_name: Some("Oneo".to_string()),
            ..BrandingSettings::default()
        };

        let renderer = PreviewRenderer::new();
        let rendered = renderer
            .render(&template, &branding, &HashMap::new())
            .unwrap();
        assert_eq!(rendered.html, "Oneo");
    }
}
