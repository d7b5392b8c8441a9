// ABOUTME: Render context management for template evaluation
// ABOUTME: Holds the variable map, truthiness rules, and operand prefix stripping

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Prefix stripped from condition operands and variable references before
/// lookup, matching how branded templates address their settings record.
pub const DEFAULT_OPERAND_PREFIX: &str = "branding.";

#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: IndexMap<String, JsonValue>,
    prefix: Option<String>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    /// Create an empty context with the default operand prefix
    pub fn new() -> Self {
        Self {
            variables: IndexMap::new(),
            prefix: Some(DEFAULT_OPERAND_PREFIX.to_string()),
        }
    }

    /// Create an empty context with a custom operand prefix
    pub fn with_prefix<S: Into<String>>(prefix: S) -> Self {
        Self {
            variables: IndexMap::new(),
            prefix: Some(prefix.into()),
        }
    }

    /// Create a context that performs no prefix stripping
    pub fn without_prefix() -> Self {
        Self {
            variables: IndexMap::new(),
            prefix: None,
        }
    }

    /// Add or update a variable
    pub fn set<K: Into<String>, V: Into<JsonValue>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Add multiple variables, later entries winning on key collisions
    pub fn extend<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsonValue>,
    {
        for (key, value) in vars {
            self.variables.insert(key.into(), value.into());
        }
    }

    /// Look up a variable by reference name, stripping the operand prefix
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.variables.get(self.strip_prefix(name))
    }

    /// Evaluate the truthiness of a variable reference.
    ///
    /// Missing names, null, `false`, zero, and the empty string are falsy;
    /// everything else (including empty arrays and objects) is truthy.
    pub fn is_truthy(&self, name: &str) -> bool {
        match self.get(name) {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::Bool(b)) => *b,
            Some(JsonValue::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Some(JsonValue::String(s)) => !s.is_empty(),
            Some(JsonValue::Array(_)) | Some(JsonValue::Object(_)) => true,
        }
    }

    /// Render a variable reference as display text for substitution.
    ///
    /// Missing names and null render as the empty string so unknown
    /// references disappear from the output instead of erroring.
    pub fn display_value(&self, name: &str) -> String {
        match self.get(name) {
            None | Some(JsonValue::Null) => String::new(),
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Variable names currently in the context, in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.variables.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn strip_prefix<'a>(&self, name: &'a str) -> &'a str {
        match &self.prefix {
            Some(prefix) => name.strip_prefix(prefix.as_str()).unwrap_or(name),
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context_with(pairs: &[(&str, JsonValue)]) -> RenderContext {
        let mut ctx = RenderContext::new();
        for (key, value) in pairs {
            ctx.set(*key, value.clone());
        }
        ctx
    }

    #[test]
    fn test_prefix_stripping() {
        let ctx = context_with(&[("logo_url", json!("https://cdn.oneo.dev/logo.png"))]);

        assert!(ctx.get("branding.logo_url").is_some());
        assert!(ctx.get("logo_url").is_some());
        assert!(ctx.get("branding.missing").is_none());
    }

    #[test]
    fn test_truthiness_rules() {
        let ctx = context_with(&[
            ("empty", json!("")),
            ("zero", json!(0)),
            ("disabled", json!(false)),
            ("nothing", json!(null)),
            ("name", json!("Oneo")),
            ("count", json!(3)),
            ("enabled", json!(true)),
            ("tags", json!([])),
        ]);

        assert!(!ctx.is_truthy("empty"));
        assert!(!ctx.is_truthy("zero"));
        assert!(!ctx.is_truthy("disabled"));
        assert!(!ctx.is_truthy("nothing"));
        assert!(!ctx.is_truthy("missing"));

        assert!(ctx.is_truthy("name"));
        assert!(ctx.is_truthy("count"));
        assert!(ctx.is_truthy("enabled"));
        assert!(ctx.is_truthy("tags"));
    }

    #[test]
    fn test_display_value_coercion() {
        let ctx = context_with(&[
            ("name", json!("Acme")),
            ("count", json!(7)),
            ("flag", json!(true)),
            ("nothing", json!(null)),
        ]);

        assert_eq!(ctx.display_value("name"), "Acme");
        assert_eq!(ctx.display_value("count"), "7");
        assert_eq!(ctx.display_value("flag"), "true");
        assert_eq!(ctx.display_value("nothing"), "");
        assert_eq!(ctx.display_value("missing"), "");
    }

    #[test]
    fn test_custom_prefix() {
        let mut ctx = RenderContext::with_prefix("settings.");
        ctx.set("footer", "Best regards");

        assert_eq!(ctx.display_value("settings.footer"), "Best regards");
        // The default prefix is not stripped under a custom prefix
        assert_eq!(ctx.display_value("branding.footer"), "");
    }

    #[test]
    fn test_extend_overwrites() {
        let mut ctx = context_with(&[("company_name", json!("Oneo"))]);
        ctx.extend(vec![("company_name", "Acme"), ("footer", "Bye")]);

        assert_eq!(ctx.display_value("company_name"), "Acme");
        assert_eq!(ctx.len(), 2);
    }
}
