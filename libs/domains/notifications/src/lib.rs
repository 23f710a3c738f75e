//! Operator email notifications.
//!
//! Renders quote summaries with Handlebars templates and delivers them
//! through a pluggable [`providers::EmailProvider`] (SMTP in production,
//! a capturing mock in tests). Delivery is best-effort by design: callers
//! surface failures as a flag, never as a pipeline error.

pub mod error;
pub mod models;
pub mod providers;
pub mod service;
pub mod templates;

pub use error::{NotificationError, NotificationResult};
pub use models::QuoteEmailData;
pub use providers::{
    EmailContent, EmailProvider, MockEmailProvider, SentEmail, SmtpConfig, SmtpProvider,
};
pub use service::{NotificationConfig, NotificationService};
pub use templates::TemplateEngine;
