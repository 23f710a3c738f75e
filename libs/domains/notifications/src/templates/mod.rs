//! Email template rendering engine.
//!
//! Handlebars-based rendering for the operator quote-summary email.

use crate::error::NotificationResult;
use crate::models::QuoteEmailData;
use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Rendered email content.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    /// HTML body content.
    pub html: String,
    /// Plain text body content.
    pub text: String,
    /// Email subject line.
    pub subject: String,
}

// Two-decimal money formatting; the service uses a single fixed currency.
handlebars_helper!(money: |v: f64| format!("{:.2}", v));

/// Template engine for rendering email templates.
pub struct TemplateEngine {
    handlebars: Arc<Handlebars<'static>>,
}

impl TemplateEngine {
    /// Create a new template engine with all templates registered.
    pub fn new() -> NotificationResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("money", Box::new(money));

        handlebars
            .register_template_string("quote_summary_html", QUOTE_SUMMARY_HTML_TEMPLATE)
            .map_err(|e| {
                crate::error::NotificationError::TemplateError(format!(
                    "Failed to register quote_summary_html: {}",
                    e
                ))
            })?;
        handlebars
            .register_template_string("quote_summary_text", QUOTE_SUMMARY_TEXT_TEMPLATE)
            .map_err(|e| {
                crate::error::NotificationError::TemplateError(format!(
                    "Failed to register quote_summary_text: {}",
                    e
                ))
            })?;

        Ok(Self {
            handlebars: Arc::new(handlebars),
        })
    }

    fn render<T: Serialize>(&self, template_name: &str, data: &T) -> NotificationResult<String> {
        self.handlebars
            .render(template_name, data)
            .map_err(crate::error::NotificationError::from)
    }

    /// Render the operator quote-summary email.
    pub fn render_quote_summary(&self, data: &QuoteEmailData) -> NotificationResult<RenderedEmail> {
        debug!(customer = %data.customer_name, machine = %data.machine_name, "Rendering quote summary email");

        let html = self.render("quote_summary_html", data)?;
        let text = self.render("quote_summary_text", data)?;

        Ok(RenderedEmail {
            html,
            text,
            subject: format!(
                "New quote request: {} ({})",
                data.customer_name, data.machine_name
            ),
        })
    }
}

// ============================================================================
// Email Templates
// ============================================================================

const QUOTE_SUMMARY_HTML_TEMPLATE: &str = r#"<div style="font-family: Arial, sans-serif; max-width: 600px; border: 1px solid #e2e8f0; padding: 25px; border-radius: 15px;">
  <h2 style="color: #2563eb; margin-top: 0;">New Quote Generated</h2>

  <div style="background: #f8fafc; padding: 15px; border-radius: 10px; margin-bottom: 20px;">
    <p style="margin: 5px 0;"><strong>Customer:</strong> {{customer_name}}</p>
    <p style="margin: 5px 0;"><strong>E-mail:</strong> {{customer_email}}</p>
    <p style="margin: 5px 0;"><strong>Phone:</strong> {{customer_phone}}</p>
  </div>

  <h3 style="color: #1e293b; border-bottom: 2px solid #f1f5f9; padding-bottom: 8px;">Production Details</h3>
  <p><strong>Selected Machine:</strong> {{machine_name}}</p>
  <p><strong>Operating Cost/Hour:</strong> $ {{money machine_hourly_cost}}</p>
  <p><strong>AI-Estimated Time:</strong> {{estimated_hours}} hours</p>

  <h3 style="color: #1e293b; border-bottom: 2px solid #f1f5f9; padding-bottom: 8px;">Part Information</h3>
  <p><strong>Type:</strong> {{part_type}} | <strong>Material:</strong> {{material}}</p>
  <p><strong>Weight:</strong> {{weight_g}}g | <strong>Size:</strong> {{size_cm}}cm</p>

  <div style="background: #eff6ff; border: 1px solid #dbeafe; padding: 20px; border-radius: 12px; margin-top: 25px; text-align: center;">
    <p style="margin: 0; color: #1e40af; font-weight: bold; font-size: 14px; text-transform: uppercase;">Estimate Shown to the Customer:</p>
    <h2 style="margin: 10px 0; color: #1d4ed8; font-size: 28px;">$ {{money price_min}} - $ {{money price_max}}</h2>
    <p style="margin: 0; font-size: 11px; color: #60a5fa;">Base Cost: $ {{money base_cost}} + Machine: $ {{money machine_cost}}</p>
  </div>

  <p style="font-size: 10px; color: #94a3b8; margin-top: 30px; text-align: center;">Generated at {{generated_at}}</p>
</div>"#;

const QUOTE_SUMMARY_TEXT_TEMPLATE: &str = r#"NEW QUOTE GENERATED

CUSTOMER
========
Name: {{customer_name}}
E-mail: {{customer_email}}
Phone: {{customer_phone}}

PRODUCTION DETAILS
==================
Selected Machine: {{machine_name}}
Operating Cost/Hour: $ {{money machine_hourly_cost}}
AI-Estimated Time: {{estimated_hours}} hours

PART INFORMATION
================
Type: {{part_type}} | Material: {{material}}
Weight: {{weight_g}}g | Size: {{size_cm}}cm

ESTIMATE SHOWN TO THE CUSTOMER
==============================
$ {{money price_min}} - $ {{money price_max}}
Base Cost: $ {{money base_cost}} + Machine: $ {{money machine_cost}}

Generated at {{generated_at}}"#;
