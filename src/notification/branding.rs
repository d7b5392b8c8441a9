// ABOUTME: Branding settings record and its flattening into template variables
// ABOUTME: Provides file loading and the sample substitution table for previews

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::Path;

use super::error::{NotificationError, Result};

/// The branding/settings record notification contexts are built from.
///
/// Unset fields are omitted from the variable map so that conditions on
/// them resolve falsy and substitutions render empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrandingSettings {
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub website_url: Option<String>,
    pub careers_url: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    pub footer_text: Option<String>,
    pub sender_name: Option<String>,
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SocialLinks {
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
}

impl BrandingSettings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NotificationError::IoError)?;
        serde_yaml::from_str(&content).map_err(NotificationError::YamlError)
    }

    /// Flatten the record into template variables.
    ///
    /// Keys are the bare names templates address through the `branding.`
    /// prefix; social links flatten alongside the top-level fields.
    pub fn to_variables(&self) -> IndexMap<String, JsonValue> {
        let mut vars = IndexMap::new();

        let fields = [
            ("company_name", &self.company_name),
            ("logo_url", &self.logo_url),
            ("primary_color", &self.primary_color),
            ("accent_color", &self.accent_color),
            ("website_url", &self.website_url),
            ("careers_url", &self.careers_url),
            ("linkedin_url", &self.social.linkedin_url),
            ("twitter_url", &self.social.twitter_url),
            ("facebook_url", &self.social.facebook_url),
            ("instagram_url", &self.social.instagram_url),
            ("footer_text", &self.footer_text),
            ("sender_name", &self.sender_name),
            ("reply_to", &self.reply_to),
        ];

        for (key, value) in fields {
            if let Some(value) = value {
                vars.insert(key.to_string(), JsonValue::String(value.clone()));
            }
        }

        vars
    }

    /// The placeholder substitution table used for previews when no real
    /// branding record is supplied. An explicit value, merged by the
    /// caller, never module state.
    pub fn sample() -> Self {
        Self {
            company_name: Some("Acme Recruiting".to_string()),
            logo_url: Some("https://cdn.example.com/acme/logo.png".to_string()),
            primary_color: Some("#1a73e8".to_string()),
            accent_color: Some("#fbbc04".to_string()),
            website_url: Some("https://acme.example.com".to_string()),
            careers_url: Some("https://acme.example.com/careers".to_string()),
            social: SocialLinks {
                linkedin_url: Some("https://linkedin.com/company/acme".to_string()),
                twitter_url: Some("https://x.com/acme".to_string()),
                facebook_url: None,
                instagram_url: None,
            },
            footer_text: Some("Acme Recruiting, 1 Main Street".to_string()),
            sender_name: Some("The Acme team".to_string()),
            reply_to: Some("talent@acme.example.com".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_omitted() {
        let settings = BrandingSettings {
            company_name: Some("Oneo".to_string()),
            ..BrandingSettings::default()
        };

        let vars = settings.to_variables();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("company_name"), Some(&JsonValue::String("Oneo".into())));
        assert!(!vars.contains_key("logo_url"));
    }

    #[test]
    fn test_social_links_flattened() {
        let settings = BrandingSettings {
            social: SocialLinks {
                linkedin_url: Some("https://linkedin.com/company/oneo".to_string()),
                ..SocialLinks::default()
            },
            ..BrandingSettings::default()
        };

        let vars = settings.to_variables();
        assert!(vars.contains_key("linkedin_url"));
        assert!(!vars.contains_key("twitter_url"));
    }

    #[test]
    fn test_sample_table_is_complete_enough_for_previews() {
        let vars = BrandingSettings::sample().to_variables();
        assert!(vars.contains_key("company_name"));
        assert!(vars.contains_key("logo_url"));
        assert!(vars.contains_key("footer_text"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
company_name: Oneo
logo_url: "https://cdn.oneo.dev/logo.png"
social:
  linkedin_url: "https://linkedin.com/company/oneo"
footer_text: "Oneo, Amsterdam"
"#;
        let settings: BrandingSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.company_name.as_deref(), Some("Oneo"));
        assert_eq!(
            settings.social.linkedin_url.as_deref(),
            Some("https://linkedin.com/company/oneo")
        );
        assert!(settings.sender_name.is_none());
    }
}
