//! SMTP email provider implementation using lettre.

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// SMTP endpoint and sender configuration.
///
/// Credentials are optional at construction time: the original operator
/// setup reads them from the environment and a missing pair must surface
/// as a failed (not fatal) send, so the check happens in [`SmtpProvider::send`].
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server host.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// Sender display name.
    pub from_name: String,
    /// SMTP username, doubling as the sender address.
    pub username: Option<String>,
    /// SMTP password.
    pub password: Option<String>,
    /// Whether to use STARTTLS (off for local dev servers like Mailpit).
    pub use_tls: bool,
}

impl SmtpConfig {
    pub fn new(host: String, port: u16, from_name: String) -> Self {
        Self {
            host,
            port,
            from_name,
            username: None,
            password: None,
            use_tls: true,
        }
    }

    /// Builder method to set TLS.
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Builder method to set credentials.
    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }
}

impl FromEnv for SmtpConfig {
    /// Reads SMTP_HOST/SMTP_PORT (defaults: the operator's Office365 relay)
    /// and EMAIL_USER/EMAIL_PASS for the sender credentials.
    fn from_env() -> Result<Self, ConfigError> {
        let port = env_or_default("SMTP_PORT", "587")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "SMTP_PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            host: env_or_default("SMTP_HOST", "smtp.office365.com"),
            port,
            from_name: env_or_default("SMTP_FROM_NAME", "Quote Service"),
            username: std::env::var("EMAIL_USER").ok(),
            password: std::env::var("EMAIL_PASS").ok(),
            use_tls: env_or_default("SMTP_USE_TLS", "true") == "true",
        })
    }
}

/// SMTP email provider.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: Arc<SmtpConfig>,
}

impl SmtpProvider {
    pub fn new(config: SmtpConfig) -> NotificationResult<Self> {
        let transport = Self::build_transport(&config)?;
        Ok(Self {
            transport,
            config: Arc::new(config),
        })
    }

    fn build_transport(
        config: &SmtpConfig,
    ) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| {
                    NotificationError::ProviderError(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(config.port)
        } else {
            // Non-TLS transport, for local dev servers like Mailpit
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host).port(config.port)
        };

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    /// Build a lettre Message from EmailContent.
    fn build_message(&self, email: &EmailContent, from_email: &str) -> NotificationResult<Message> {
        let from: Mailbox = format!("{} <{}>", self.config.from_name, from_email)
            .parse()
            .map_err(|e| NotificationError::InvalidEmail(format!("from address: {}", e)))?;

        let to: Mailbox = if email.to_name.is_empty() {
            email.to_email.parse()
        } else {
            format!("{} <{}>", email.to_name, email.to_email).parse()
        }
        .map_err(|e| NotificationError::InvalidEmail(format!("to address: {}", e)))?;

        // Multipart message with both plain text and HTML
        Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| {
                NotificationError::ProviderError(format!("Failed to build email message: {}", e))
            })
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail> {
        // Credentials come from the environment; without them the send is
        // reported as failed rather than attempted anonymously.
        let Some(from_email) = self.config.username.clone() else {
            return Err(NotificationError::ConfigError(
                "EMAIL_USER/EMAIL_PASS not configured".to_string(),
            ));
        };
        if self.config.password.is_none() {
            return Err(NotificationError::ConfigError(
                "EMAIL_USER/EMAIL_PASS not configured".to_string(),
            ));
        }

        debug!(
            to = %email.to_email,
            subject = %email.subject,
            host = %self.config.host,
            port = %self.config.port,
            "Sending email via SMTP"
        );

        let message = self.build_message(email, &from_email)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(to = %email.to_email, error = %e, "Failed to send email via SMTP");
            NotificationError::ProviderError(format!("SMTP send failed: {}", e))
        })?;

        let message_id = response.message().next().map(|s| s.to_string());

        info!(to = %email.to_email, message_id = ?message_id, "Email sent via SMTP");

        Ok(SentEmail {
            message_id,
            accepted: true,
        })
    }

    fn name(&self) -> &'static str {
        "SMTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("SMTP_HOST", None::<&str>),
                ("SMTP_PORT", None),
                ("EMAIL_USER", None),
                ("EMAIL_PASS", None),
            ],
            || {
                let config = SmtpConfig::from_env().unwrap();
                assert_eq!(config.host, "smtp.office365.com");
                assert_eq!(config.port, 587);
                assert!(config.use_tls);
                assert!(config.username.is_none());
                assert!(config.password.is_none());
            },
        );
    }

    #[test]
    fn test_smtp_config_from_env_invalid_port() {
        temp_env::with_var("SMTP_PORT", Some("not_a_port"), || {
            assert!(SmtpConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_smtp_config_with_credentials() {
        let config = SmtpConfig::new("mail.example.com".to_string(), 587, "Test".to_string())
            .with_tls(false)
            .with_credentials("user@example.com".to_string(), "pass".to_string());

        assert!(!config.use_tls);
        assert_eq!(config.username, Some("user@example.com".to_string()));
        assert_eq!(config.password, Some("pass".to_string()));
    }

    #[tokio::test]
    async fn test_send_without_credentials_is_config_error() {
        let config = SmtpConfig::new("localhost".to_string(), 1025, "Test".to_string())
            .with_tls(false);
        let provider = SmtpProvider::new(config).unwrap();

        let email = EmailContent {
            to_email: "operator@example.com".to_string(),
            ..Default::default()
        };

        let err = provider.send(&email).await.unwrap_err();
        assert!(matches!(err, NotificationError::ConfigError(_)));
    }
}
