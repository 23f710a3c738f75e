//! Bridges the quote pipeline to the operator email channel.

use async_trait::async_trait;
use domain_notifications::{NotificationService, QuoteEmailData};
use domain_quotes::{MachineSummary, Quote, QuoteNotifier, QuoteRequest};
use tracing::warn;

/// Sends the operator a quote summary email after each computed quote.
///
/// Every failure is absorbed here and reduced to the delivery flag; the
/// customer-facing quote never depends on email deliverability.
pub struct EmailQuoteNotifier {
    mailer: NotificationService,
}

impl EmailQuoteNotifier {
    pub fn new(mailer: NotificationService) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl QuoteNotifier for EmailQuoteNotifier {
    async fn notify(
        &self,
        request: &QuoteRequest,
        quote: &Quote,
        machine: &MachineSummary,
    ) -> bool {
        let data = QuoteEmailData {
            customer_name: request.name.clone(),
            customer_email: request.email.clone(),
            customer_phone: request
                .phone
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            machine_name: machine.name.clone(),
            machine_hourly_cost: machine.hourly_cost,
            estimated_hours: quote.estimated_hours,
            part_type: request.part_type.clone(),
            material: request.material.clone(),
            weight_g: request.weight_g,
            size_cm: request.size_cm,
            price_min: quote.price_min,
            price_max: quote.price_max,
            base_cost: quote.base_cost,
            machine_cost: quote.machine_cost,
            generated_at: chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
        };

        match self.mailer.send_quote_summary(&data).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, customer = %request.email, "Quote summary delivery failed");
                false
            }
        }
    }
}
