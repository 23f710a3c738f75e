//! HTTP handlers for the quotes domain.

use crate::error::QuoteResult;
use crate::models::{QuoteRequest, QuoteResponse};
use crate::service::QuoteService;
use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI documentation for the quotes API
#[derive(OpenApi)]
#[openapi(
    paths(create_estimate),
    components(schemas(QuoteRequest, QuoteResponse)),
    tags(
        (name = "quotes", description = "Price quote estimation for custom 3D-printed parts")
    )
)]
pub struct ApiDoc;

/// Create the quotes router
pub fn router(service: QuoteService) -> Router {
    Router::new()
        .route("/", post(create_estimate))
        .with_state(Arc::new(service))
}

/// Estimate a price quote for a part request
#[utoipa::path(
    post,
    path = "",
    tag = "quotes",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Computed price range", body = QuoteResponse),
        (status = 400, description = "Malformed request or empty machine catalog"),
        (status = 502, description = "AI estimation unavailable"),
        (status = 500, description = "Invalid machine configuration")
    )
)]
async fn create_estimate(
    State(service): State<Arc<QuoteService>>,
    ValidatedJson(request): ValidatedJson<QuoteRequest>,
) -> QuoteResult<Json<QuoteResponse>> {
    let response = service.estimate(request).await?;
    Ok(Json(response))
}
