//! AI estimation boundary.
//!
//! Sends the part request plus the full historical-order context to the
//! Gemini API and parses a strict JSON estimate back. Anything missing or
//! malformed in the response aborts the pipeline; no defaults are invented.

use crate::error::{QuoteError, QuoteResult};
use crate::models::{AiEstimate, HistoricalOrder, QuoteRequest};
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

/// Trait for AI estimate providers.
#[async_trait]
pub trait Estimator: Send + Sync {
    /// Estimate base cost and production time for a new part, given the
    /// historical orders as context.
    async fn estimate(
        &self,
        orders: &[HistoricalOrder],
        request: &QuoteRequest,
    ) -> QuoteResult<AiEstimate>;
}

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl FromEnv for GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env_required("GEMINI_API_KEY")?,
            model: env_or_default("GEMINI_MODEL", "gemini-3-flash-preview"),
        })
    }
}

/// Estimator backed by the Gemini `generateContent` endpoint.
pub struct GeminiEstimator {
    client: Client,
    config: GeminiConfig,
}

// generateContent response envelope; only the text of the first candidate
// part is consumed.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiEstimator {
    const API_BASE: &'static str = "https://generativelanguage.googleapis.com/v1beta/models";

    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn build_prompt(orders: &[HistoricalOrder], request: &QuoteRequest) -> QuoteResult<String> {
        let orders_json = serde_json::to_string(orders)
            .map_err(|e| QuoteError::Internal(format!("failed to serialize orders: {}", e)))?;
        let request_json = serde_json::to_string(request)
            .map_err(|e| QuoteError::Internal(format!("failed to serialize request: {}", e)))?;

        Ok(format!(
            "As a 3D printing pricing expert, analyze these previously produced parts: {orders_json}\n\
             Estimate for this new order: {request_json}\n\
             \n\
             RETURN ONLY JSON:\n\
             {{\n\
               \"baseCost\": float,\n\
               \"estimatedHours\": float,\n\
               \"rationale\": \"string\"\n\
             }}"
        ))
    }
}

#[async_trait]
impl Estimator for GeminiEstimator {
    async fn estimate(
        &self,
        orders: &[HistoricalOrder],
        request: &QuoteRequest,
    ) -> QuoteResult<AiEstimate> {
        let prompt = Self::build_prompt(orders, request)?;
        let url = format!("{}/{}:generateContent", Self::API_BASE, self.config.model);

        info!(model = %self.config.model, orders = orders.len(), "Requesting AI estimate");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&json!({
                "contents": [{"parts": [{"text": prompt}]}],
                "generationConfig": {"responseMimeType": "application/json"}
            }))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "AI estimation request failed");
                QuoteError::Estimate(format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            error!(status = %response.status(), "AI estimation service returned an error");
            return Err(QuoteError::Estimate(format!(
                "estimation service returned {}",
                response.status()
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = %e, "AI estimation response body was not valid JSON");
            QuoteError::Estimate(format!("malformed response body: {}", e))
        })?;

        let text = payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                error!("AI estimation response contained no candidates");
                QuoteError::Estimate("response contained no candidates".to_string())
            })?;

        debug!(estimate = %text, "Parsed AI candidate text");
        parse_estimate(text)
    }
}

/// Parse the strict `{baseCost, estimatedHours, rationale}` payload.
///
/// Missing fields, non-numeric values, and negative cost or time all fail;
/// extra fields are tolerated.
pub fn parse_estimate(text: &str) -> QuoteResult<AiEstimate> {
    let estimate: AiEstimate = serde_json::from_str(text).map_err(|e| {
        error!(error = %e, "AI estimate payload failed validation");
        QuoteError::Estimate(format!("malformed estimate payload: {}", e))
    })?;

    estimate.validate()?;
    Ok(estimate)
}
