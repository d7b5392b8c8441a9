// ABOUTME: Main application orchestration for herald CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        // Initialize logging
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting herald v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        // Merge any command-specific variables into config
        match &args.command {
            Commands::Render { vars, .. } | Commands::Preview { vars, .. } => {
                let variables = Args::parse_variables(vars)?;
                self.config.merge_variables(variables);
            }
            _ => {}
        }

        // Execute the appropriate command
        match args.command {
            Commands::Render {
                template,
                branding,
                vars,
                format,
                output,
            } => {
                commands::render_template(template, branding, vars, format, output, &self.config)
                    .await
            }

            Commands::Preview { template, vars } => {
                commands::preview_template(template, vars, &self.config).await
            }

            Commands::Validate { template } => {
                commands::validate_template(template, &self.config).await
            }

            Commands::Init { name, output_dir } => {
                commands::init_template(name, output_dir, &self.config).await
            }
        }
    }

    /// Create application from command line arguments
    pub async fn from_args() -> Result<Self> {
        let args = Args::parse_args();
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}
