//! Notification service: renders and delivers the operator quote summary.

use crate::error::{NotificationError, NotificationResult};
use crate::models::QuoteEmailData;
use crate::providers::{EmailContent, EmailProvider, SentEmail};
use crate::templates::TemplateEngine;
use core_config::{ConfigError, FromEnv, env_or_default};
use std::sync::Arc;
use tracing::info;

/// Configuration for the notification service.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Where quote summaries are delivered.
    pub operator_email: String,
    /// Display name used for the operator mailbox.
    pub operator_name: String,
}

impl FromEnv for NotificationConfig {
    /// OPERATOR_EMAIL may be unset; delivery then fails per send, reported
    /// as a flag, never as a startup error.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            operator_email: env_or_default("OPERATOR_EMAIL", ""),
            operator_name: env_or_default("OPERATOR_NAME", "Operator"),
        })
    }
}

/// Service for delivering quote-summary emails to the operator.
pub struct NotificationService {
    provider: Arc<dyn EmailProvider>,
    templates: TemplateEngine,
    config: NotificationConfig,
}

impl NotificationService {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        config: NotificationConfig,
    ) -> NotificationResult<Self> {
        Ok(Self {
            provider,
            templates: TemplateEngine::new()?,
            config,
        })
    }

    /// Render and send a quote summary to the operator address.
    pub async fn send_quote_summary(&self, data: &QuoteEmailData) -> NotificationResult<SentEmail> {
        if self.config.operator_email.is_empty() {
            return Err(NotificationError::ConfigError(
                "OPERATOR_EMAIL not configured".to_string(),
            ));
        }

        let rendered = self.templates.render_quote_summary(data)?;

        let email = EmailContent {
            to_email: self.config.operator_email.clone(),
            to_name: self.config.operator_name.clone(),
            subject: rendered.subject,
            html_body: rendered.html,
            text_body: rendered.text,
        };

        let sent = self.provider.send(&email).await?;

        info!(
            provider = self.provider.name(),
            customer = %data.customer_name,
            to = %self.config.operator_email,
            "Quote summary delivered"
        );

        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockEmailProvider;

    fn sample_data() -> QuoteEmailData {
        QuoteEmailData {
            customer_name: "Grace Hopper".to_string(),
            customer_email: "grace@example.com".to_string(),
            customer_phone: "555-0100".to_string(),
            machine_name: "Creality K2 Plus".to_string(),
            machine_hourly_cost: 0.5,
            estimated_hours: 12.0,
            part_type: "bracket".to_string(),
            material: "ABS".to_string(),
            weight_g: 300.0,
            size_cm: 22.0,
            price_min: 110.0,
            price_max: 132.0,
            base_cost: 100.0,
            machine_cost: 6.0,
            generated_at: "2026-01-01 12:00:00".to_string(),
        }
    }

    fn config() -> NotificationConfig {
        NotificationConfig {
            operator_email: "operator@example.com".to_string(),
            operator_name: "Operator".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_quote_summary_delivers_to_operator() {
        let provider = Arc::new(MockEmailProvider::new());
        let service = NotificationService::new(provider.clone(), config()).unwrap();

        let sent = service.send_quote_summary(&sample_data()).await.unwrap();
        assert!(sent.accepted);

        let emails = provider.sent_emails().await;
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].to_email, "operator@example.com");
        assert!(emails[0].subject.contains("Grace Hopper"));
        assert!(emails[0].html_body.contains("Creality K2 Plus"));
    }

    #[tokio::test]
    async fn test_send_quote_summary_provider_failure() {
        let provider = Arc::new(MockEmailProvider::failing("connection refused"));
        let service = NotificationService::new(provider, config()).unwrap();

        let err = service.send_quote_summary(&sample_data()).await.unwrap_err();
        assert!(matches!(err, NotificationError::ProviderError(_)));
    }

    #[tokio::test]
    async fn test_send_quote_summary_without_operator_email() {
        let provider = Arc::new(MockEmailProvider::new());
        let service = NotificationService::new(
            provider,
            NotificationConfig {
                operator_email: String::new(),
                operator_name: "Operator".to_string(),
            },
        )
        .unwrap();

        let err = service.send_quote_summary(&sample_data()).await.unwrap_err();
        assert!(matches!(err, NotificationError::ConfigError(_)));
    }
}
