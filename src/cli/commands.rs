// ABOUTME: Command implementations for the herald CLI
// ABOUTME: Handles execution of render, preview, validate, and init commands

use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

use super::config::Config;
use crate::notification::{BrandingSettings, NotificationParser, PreviewRenderer};
use crate::output::config::{OutputConfig, OutputDestination};
use crate::output::OutputHandler;

/// Render a template with branding settings and write the result
pub async fn render_template(
    template_path: PathBuf,
    branding_path: Option<PathBuf>,
    vars: Vec<String>,
    format: Option<String>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    info!("Rendering template: {}", template_path.display());

    let overrides = collect_overrides(&vars, config)?;

    let parser = NotificationParser::new();
    let template = parser
        .parse_file(&template_path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse template: {}", e))?;
    info!("Loaded template: {}", template.name);

    let branding = load_branding(branding_path, config)?;

    let renderer = PreviewRenderer::new();
    let rendered = renderer
        .render(&template, &branding, &overrides)
        .map_err(|e| anyhow::anyhow!("Rendering failed: {}", e))?;

    if !rendered.metadata.unresolved.is_empty() {
        info!(
            "Unresolved variables: {}",
            rendered.metadata.unresolved.join(", ")
        );
    }

    let destination = match output {
        Some(path) => OutputDestination::new_file(path.to_string_lossy()),
        None => OutputDestination::new_stdout(),
    };
    let output_config = OutputConfig::new(
        format.unwrap_or_else(|| "html".to_string()),
        vec![destination],
    );

    let handler = OutputHandler::new();
    handler
        .output_notification(&rendered, &output_config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write output: {}", e))?;

    info!("Render completed: {}", rendered.metadata.render_id);
    Ok(())
}

/// Render a template against the sample branding table
pub async fn preview_template(
    template_path: PathBuf,
    vars: Vec<String>,
    config: &Config,
) -> Result<()> {
    info!("Previewing template: {}", template_path.display());

    let overrides = collect_overrides(&vars, config)?;

    let parser = NotificationParser::new();
    let template = parser
        .parse_file(&template_path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse template: {}", e))?;

    let renderer = PreviewRenderer::new();
    let rendered = renderer
        .render_sample(&template, &overrides)
        .map_err(|e| anyhow::anyhow!("Rendering failed: {}", e))?;

    let handler = OutputHandler::new();
    handler
        .output_notification(&rendered, &OutputConfig::default())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write output: {}", e))?;

    Ok(())
}

/// Validate a template file
pub async fn validate_template(template_path: PathBuf, _config: &Config) -> Result<()> {
    info!("Validating template: {}", template_path.display());

    let parser = NotificationParser::new();
    let template = parser
        .parse_file(&template_path)
        .await
        .map_err(|e| anyhow::anyhow!("Template validation failed: {}", e))?;

    template
        .check_syntax()
        .map_err(|e| anyhow::anyhow!("Template validation failed: {}", e))?;

    let variables = template.referenced_variables();

    println!("✓ Template '{}' is valid", template.name);
    println!("  Referenced variables: {}", variables.len());
    for name in &variables {
        println!("    {}", name);
    }

    info!("Template validation completed successfully");
    Ok(())
}

/// Initialize a new template file
pub async fn init_template(name: String, output_dir: PathBuf, _config: &Config) -> Result<()> {
    info!(
        "Initializing template '{}' in {}",
        name,
        output_dir.display()
    );

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)?;
    }

    let template_file = output_dir.join(format!("{}.yaml", name));

    if template_file.exists() {
        return Err(anyhow::anyhow!(
            "Template file already exists: {}",
            template_file.display()
        ));
    }

    let content = starter_template(&name);
    std::fs::write(&template_file, content)?;

    info!("Created template file: {}", template_file.display());
    println!("Created {}", template_file.display());

    Ok(())
}

fn collect_overrides(vars: &[String], config: &Config) -> Result<HashMap<String, String>> {
    let mut overrides = config.template_vars.clone();
    overrides.extend(super::Args::parse_variables(vars)?);
    Ok(overrides)
}

fn load_branding(path: Option<PathBuf>, config: &Config) -> Result<BrandingSettings> {
    let path = path.or_else(|| config.branding_file.clone());

    match path {
        Some(path) => BrandingSettings::from_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to load branding file: {}", e)),
        None => Ok(BrandingSettings::sample()),
    }
}

fn starter_template(name: &str) -> String {
    format!(
        r#"name: {name}
description: Describe when this notification is sent

subject: "Update from {{{{ branding.company_name }}}}"
html: |
  <html>
    <body>
      {{% if branding.logo_url %}}
      <img src="{{{{ branding.logo_url }}}}" alt="{{{{ branding.company_name }}}}" height="40">
      {{% else %}}
      <h1>{{{{ branding.company_name }}}}</h1>
      {{% endif %}}

      <p>Hi {{{{ candidate_name }}}},</p>
      <p>Your application is moving forward.</p>

      {{% if branding.footer_text %}}
      <footer>{{{{ branding.footer_text }}}}</footer>
      {{% endif %}}
    </body>
  </html>

variables:
  candidate_name: "there"
"#
    )
}
