//! Data models for the quotes domain.

use crate::error::{QuoteError, QuoteResult};
use core_config::{ConfigError, FromEnv, env_parse_or_default};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An incoming quote request for a custom 3D-printed part.
///
/// Wire names are camelCase; `material` is free-form and compared
/// case-insensitively by the machine selector.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Customer name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Customer contact e-mail.
    #[validate(email)]
    pub email: String,
    /// Customer phone, optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Part type (e.g. "vase", "bracket").
    #[serde(rename = "type")]
    pub part_type: String,
    /// Print material (e.g. "PLA", "ABS", "PETG").
    pub material: String,
    /// Part weight in grams.
    #[validate(range(min = 0.0))]
    pub weight_g: f64,
    /// Largest part dimension in centimeters.
    #[validate(range(min = 0.0))]
    pub size_cm: f64,
    /// Whether the customer already has a ready-to-print file.
    pub has_print_file: bool,
}

/// A production machine from the catalog.
///
/// Identity is the display name; the selector matches on name substrings so
/// catalog edits don't require code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub name: String,
    /// Purchase price of the machine.
    pub investment_cost: f64,
    /// Rated lifetime in operating hours. Must be positive for the cost
    /// model to be defined.
    pub lifetime_hours: f64,
}

/// A historical order record, passed through to the AI estimator as
/// context. The core never interprets its fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoricalOrder(pub serde_json::Value);

/// The structured estimate returned by the AI service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiEstimate {
    /// Base cost derived from similar historical orders.
    pub base_cost: f64,
    /// Estimated production time in hours.
    pub estimated_hours: f64,
    /// Free-text reasoning behind the estimate.
    pub rationale: String,
}

impl AiEstimate {
    /// Negative cost or time is invalid estimator output, never clamped.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.base_cost < 0.0 {
            return Err(QuoteError::Estimate(format!(
                "negative baseCost: {}",
                self.base_cost
            )));
        }
        if self.estimated_hours < 0.0 {
            return Err(QuoteError::Estimate(format!(
                "negative estimatedHours: {}",
                self.estimated_hours
            )));
        }
        Ok(())
    }
}

/// The computed quote. Derived per request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub price_min: f64,
    pub price_max: f64,
    pub estimated_hours: f64,
    pub base_cost: f64,
    pub machine_cost: f64,
    pub rationale: String,
}

/// The response returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub value_min: f64,
    pub value_max: f64,
    pub estimated_hours: f64,
    pub base_cost_similar: f64,
    pub total_machine_cost: f64,
    pub rationale: String,
    /// Whether the operator summary email was delivered.
    pub notified: bool,
}

impl QuoteResponse {
    pub fn from_quote(quote: Quote, notified: bool) -> Self {
        Self {
            value_min: quote.price_min,
            value_max: quote.price_max,
            estimated_hours: quote.estimated_hours,
            base_cost_similar: quote.base_cost,
            total_machine_cost: quote.machine_cost,
            rationale: quote.rationale,
            notified,
        }
    }
}

/// Commercial pricing knobs, injected at startup.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Factor applied to total cost for the upper price bound. 1.20 means
    /// a 20% margin; values below 1.0 are a configuration mistake.
    pub margin_multiplier: f64,
    /// Flat surcharge when the customer has no ready-to-print file.
    pub modeling_fee: f64,
}

impl FromEnv for PricingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            margin_multiplier: env_parse_or_default("MARGIN_MULTIPLIER", 1.20)?,
            modeling_fee: env_parse_or_default("MODELING_FEE", 25.0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_request_wire_names() {
        let json = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "type": "vase",
            "material": "PLA",
            "weightG": 120.0,
            "sizeCm": 10.0,
            "hasPrintFile": true
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.part_type, "vase");
        assert_eq!(request.weight_g, 120.0);
        assert_eq!(request.size_cm, 10.0);
        assert!(request.has_print_file);
        assert!(request.phone.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_quote_request_validation_rejects_bad_email() {
        let json = r#"{
            "name": "Ada",
            "email": "not-an-email",
            "type": "vase",
            "material": "PLA",
            "weightG": 120.0,
            "sizeCm": 10.0,
            "hasPrintFile": true
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_quote_response_wire_names() {
        let response = QuoteResponse {
            value_min: 50.8,
            value_max: 60.96,
            estimated_hours: 4.0,
            base_cost_similar: 50.0,
            total_machine_cost: 0.8,
            rationale: "similar vase".to_string(),
            notified: true,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("valueMin").is_some());
        assert!(json.get("valueMax").is_some());
        assert!(json.get("estimatedHours").is_some());
        assert!(json.get("baseCostSimilar").is_some());
        assert!(json.get("totalMachineCost").is_some());
        assert!(json.get("notified").is_some());
    }

    #[test]
    fn test_ai_estimate_rejects_missing_fields() {
        let result: Result<AiEstimate, _> =
            serde_json::from_str(r#"{"baseCost": 50.0, "rationale": "similar vase"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ai_estimate_rejects_non_numeric_fields() {
        let result: Result<AiEstimate, _> = serde_json::from_str(
            r#"{"baseCost": "fifty", "estimatedHours": 4.0, "rationale": "similar vase"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_ai_estimate_validate_rejects_negative_values() {
        let estimate = AiEstimate {
            base_cost: -1.0,
            estimated_hours: 4.0,
            rationale: String::new(),
        };
        assert!(estimate.validate().is_err());

        let estimate = AiEstimate {
            base_cost: 50.0,
            estimated_hours: -0.5,
            rationale: String::new(),
        };
        assert!(estimate.validate().is_err());
    }

    #[test]
    fn test_pricing_config_defaults() {
        temp_env::with_vars(
            [("MARGIN_MULTIPLIER", None::<&str>), ("MODELING_FEE", None)],
            || {
                let config = PricingConfig::from_env().unwrap();
                assert_eq!(config.margin_multiplier, 1.20);
                assert_eq!(config.modeling_fee, 25.0);
            },
        );
    }

    #[test]
    fn test_pricing_config_rejects_malformed_margin() {
        temp_env::with_var("MARGIN_MULTIPLIER", Some("twenty percent"), || {
            assert!(PricingConfig::from_env().is_err());
        });
    }
}
