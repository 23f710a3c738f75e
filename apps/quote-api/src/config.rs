use core_config::{AppInfo, Environment, FromEnv, app_info, server::ServerConfig};
use domain_notifications::{NotificationConfig, SmtpConfig};
use domain_quotes::catalog::CatalogConfig;
use domain_quotes::estimator::GeminiConfig;
use domain_quotes::models::PricingConfig;

/// Application-specific configuration.
/// Composes the shared config components from the domain libraries.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
    pub pricing: PricingConfig,
    pub gemini: GeminiConfig,
    pub smtp: SmtpConfig,
    pub notifications: NotificationConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?, // Defaults: HOST=0.0.0.0, PORT=5000
            environment: Environment::from_env(),
            catalog: CatalogConfig::from_env()?,
            pricing: PricingConfig::from_env()?,
            gemini: GeminiConfig::from_env()?, // Required - fails without GEMINI_API_KEY
            smtp: SmtpConfig::from_env()?,
            notifications: NotificationConfig::from_env()?,
        })
    }
}
