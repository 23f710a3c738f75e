//! Quote service: per-request orchestration of the estimation pipeline.

use crate::calculator;
use crate::catalog::CatalogStore;
use crate::cost;
use crate::error::QuoteResult;
use crate::estimator::Estimator;
use crate::models::{PricingConfig, Quote, QuoteRequest, QuoteResponse};
use crate::selector;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

/// The machine facts the notifier needs alongside the quote.
#[derive(Debug, Clone)]
pub struct MachineSummary {
    pub name: String,
    pub hourly_cost: f64,
}

/// Best-effort side channel for the operator summary.
///
/// Implementations absorb every failure internally and answer with the
/// delivery flag; the quote returned to the customer must never depend on
/// email deliverability.
#[async_trait]
pub trait QuoteNotifier: Send + Sync {
    async fn notify(&self, request: &QuoteRequest, quote: &Quote, machine: &MachineSummary)
    -> bool;
}

/// Service that runs the quote estimation pipeline.
pub struct QuoteService {
    catalog: CatalogStore,
    pricing: PricingConfig,
    estimator: Arc<dyn Estimator>,
    notifier: Arc<dyn QuoteNotifier>,
}

impl QuoteService {
    pub fn new(
        catalog: CatalogStore,
        pricing: PricingConfig,
        estimator: Arc<dyn Estimator>,
        notifier: Arc<dyn QuoteNotifier>,
    ) -> Self {
        Self {
            catalog,
            pricing,
            estimator,
            notifier,
        }
    }

    /// Produce a quote for a part request.
    ///
    /// The catalog is reloaded every call so edits take effect immediately.
    /// Any computation error aborts before a partial quote exists; only the
    /// notification outcome is reduced to a flag.
    #[instrument(skip(self, request), fields(customer = %request.email, material = %request.material))]
    pub async fn estimate(&self, request: QuoteRequest) -> QuoteResult<QuoteResponse> {
        let machines = self.catalog.load_machines().await?;
        let orders = self.catalog.load_orders().await?;

        let machine = selector::select_machine(request.size_cm, &request.material, &machines)?;
        let hourly_cost = cost::hourly_cost(machine)?;

        let estimate = self.estimator.estimate(&orders, &request).await?;
        let quote = calculator::compute_quote(&request, &estimate, machine, hourly_cost, &self.pricing);

        info!(
            machine = %machine.name,
            price_min = quote.price_min,
            price_max = quote.price_max,
            "Quote computed"
        );

        let summary = MachineSummary {
            name: machine.name.clone(),
            hourly_cost,
        };
        let notified = self.notifier.notify(&request, &quote, &summary).await;

        Ok(QuoteResponse::from_quote(quote, notified))
    }
}
