use axum::Router;
use axum_helpers::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_notifications::{NotificationService, SmtpProvider};
use domain_quotes::catalog::CatalogStore;
use domain_quotes::estimator::GeminiEstimator;
use domain_quotes::{QuoteService, handlers};
use std::sync::Arc;
use tracing::info;

mod config;
mod notifier;
mod openapi;

use config::Config;
use notifier::EmailQuoteNotifier;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // The AI boundary and the operator email channel are the only external
    // collaborators; both are wired here and injected into the service.
    let estimator = Arc::new(GeminiEstimator::new(config.gemini.clone()));

    let provider = Arc::new(SmtpProvider::new(config.smtp.clone())?);
    let mailer = NotificationService::new(provider, config.notifications.clone())?;
    let notifier = Arc::new(EmailQuoteNotifier::new(mailer));

    let service = QuoteService::new(
        CatalogStore::new(config.catalog.clone()),
        config.pricing.clone(),
        estimator,
        notifier,
    );

    // Quote endpoint lives at /api/estimate; create_router adds docs,
    // middleware, and the /api prefix.
    let api_routes = Router::new().nest("/estimate", handlers::router(service));
    let router = create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router.merge(health_router(config.app));

    info!("Starting {} v{}", config.app.name, config.app.version);

    create_app(app, &config.server).await?;

    Ok(())
}
