// ABOUTME: Main template engine implementation composing the render pipeline
// ABOUTME: Runs conditional block evaluation followed by variable substitution

use super::conditionals;
use super::context::RenderContext;
use super::error::Result;
use super::substitution;

/// Configuration for conditional evaluation.
///
/// `strict` turns malformed-nesting degradation into an error; the lenient
/// default matches the preview rendering behavior where damaged templates
/// keep their remaining tags literal.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    pub max_passes: usize,
    pub strict: bool,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_passes: 100,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    options: EvaluatorOptions,
}

impl TemplateEngine {
    /// Create a new engine with lenient defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom evaluator options
    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Render a template string: conditionals first, then substitution
    pub fn render(&self, template: &str, context: &RenderContext) -> Result<String> {
        let resolved = conditionals::evaluate(template, context, &self.options)?;
        Ok(substitution::substitute(&resolved, context))
    }

    /// Validate conditional nesting without rendering
    pub fn check(&self, template: &str) -> Result<()> {
        conditionals::check_nesting(template)
    }

    /// All variable names a template refers to, from both `{{ }}`
    /// expressions and `{% if %}` condition operands, deduplicated in
    /// order of first appearance.
    pub fn referenced_variables(&self, template: &str) -> Vec<String> {
        let mut names = substitution::referenced_variables(template);
        names.extend(conditionals::condition_operands(template));

        let mut seen = Vec::new();
        for name in names {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Check if a string contains template expressions
    pub fn has_tags(text: &str) -> bool {
        text.contains("{%") || text.contains("{{")
    }
}
