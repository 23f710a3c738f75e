use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the quote API.
#[derive(OpenApi)]
#[openapi(
    nest(
        (path = "/api/estimate", api = domain_quotes::handlers::ApiDoc)
    ),
    info(
        title = "quote-api",
        description = "Price quote estimation for custom 3D-printed parts"
    )
)]
pub struct ApiDoc;
