//! Data models for the notifications domain.

use serde::{Deserialize, Serialize};

/// Everything the quote-summary email template needs.
///
/// Monetary fields are pre-formatted upstream only in the sense that they
/// are plain numbers in a single fixed currency; the template applies the
/// display formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteEmailData {
    pub customer_name: String,
    pub customer_email: String,
    /// Customer phone, already defaulted to "N/A" when absent.
    pub customer_phone: String,
    pub machine_name: String,
    pub machine_hourly_cost: f64,
    pub estimated_hours: f64,
    pub part_type: String,
    pub material: String,
    pub weight_g: f64,
    pub size_cm: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub base_cost: f64,
    pub machine_cost: f64,
    /// Human-readable generation timestamp for the footer.
    pub generated_at: String,
}
