// ABOUTME: Variable substitution for {{ variable }} references in templates
// ABOUTME: Regex-driven single-pass interpolation against the render context

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::context::RenderContext;

const VARIABLE_PATTERN: &str = r"\{\{\s*([A-Za-z_][A-Za-z0-9_.]*)\s*\}\}";

fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(VARIABLE_PATTERN).expect("variable pattern is valid"))
}

/// Replace every `{{ variable }}` reference with its context value.
///
/// Unknown and null variables render as the empty string, so a template
/// never fails to substitute.
pub fn substitute(text: &str, ctx: &RenderContext) -> String {
    variable_pattern()
        .replace_all(text, |caps: &Captures| ctx.display_value(&caps[1]))
        .into_owned()
}

/// Collect the variable names referenced by `{{ }}` expressions, in order
/// of appearance and without deduplication.
pub fn referenced_variables(text: &str) -> Vec<String> {
    variable_pattern()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Collect referenced variables that do not resolve in the context
pub fn unresolved_variables(text: &str, ctx: &RenderContext) -> Vec<String> {
    let mut unresolved = Vec::new();
    for caps in variable_pattern().captures_iter(text) {
        let name = &caps[1];
        if ctx.get(name).is_none() && !unresolved.iter().any(|seen| seen == name) {
            unresolved.push(name.to_string());
        }
    }
    unresolved
}
