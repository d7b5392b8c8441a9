// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for herald

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "A CLI tool for rendering branded notification email templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a notification template with branding settings
    Render {
        #[arg(help = "Path to template YAML file")]
        template: PathBuf,

        #[arg(short, long, help = "Path to branding settings YAML file")]
        branding: Option<PathBuf>,

        #[arg(
            short = 'V',
            long = "var",
            help = "Override template variables (key=value)"
        )]
        vars: Vec<String>,

        #[arg(short, long, help = "Output format (html, json, text)")]
        format: Option<String>,

        #[arg(short, long, help = "Output file path (defaults to stdout)")]
        output: Option<PathBuf>,
    },

    /// Render a template against the sample branding table
    Preview {
        #[arg(help = "Path to template YAML file")]
        template: PathBuf,

        #[arg(long = "var", help = "Override template variables (key=value)")]
        vars: Vec<String>,
    },

    /// Validate a template file without rendering
    Validate {
        #[arg(help = "Path to template YAML file")]
        template: PathBuf,
    },

    /// Initialize a new template file from a starter document
    Init {
        #[arg(help = "Name of the template to create")]
        name: String,

        #[arg(short, long, help = "Output directory", default_value = ".")]
        output_dir: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(
        vars: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut variables = std::collections::HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}
