// ABOUTME: Notification template module for herald
// ABOUTME: Provides template documents, branding settings, and preview rendering

pub mod branding;
pub mod error;
pub mod preview;
pub mod template;

pub use branding::{BrandingSettings, SocialLinks};
pub use error::{NotificationError, Result};
pub use preview::{PreviewRenderer, RenderMetadata, RenderedNotification};
pub use template::{NotificationParser, NotificationTemplate};
