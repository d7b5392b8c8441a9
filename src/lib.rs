// ABOUTME: Main library module for the herald notification renderer
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod notification;
pub mod output;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use notification::{BrandingSettings, NotificationParser, NotificationTemplate, PreviewRenderer, RenderedNotification};
pub use output::{OutputHandler, OutputProcessor};
pub use template::{EvaluatorOptions, RenderContext, TemplateEngine};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
