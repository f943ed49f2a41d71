//! REST route registration for the product sum module.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use super::dto::{CalculateProductRequest, ErrorDto, HealthResponse, ProductSumDto};
use super::handlers;
use crate::domain::service::ProductSumService;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Sum API"),
    paths(handlers::calculate_product, handlers::health),
    components(schemas(CalculateProductRequest, ProductSumDto, ErrorDto, HealthResponse)),
    tags((name = "Product Sum", description = "Per-product quantity sums over CSV files"))
)]
struct ApiDoc;

/// OpenAPI document for the routes registered by [`register_routes`].
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Register the product sum REST routes on `router`.
#[must_use]
pub fn register_routes(router: Router, service: Arc<ProductSumService>) -> Router {
    router
        .route("/calculate-product", post(handlers::calculate_product))
        .route("/health", get(handlers::health))
        .layer(Extension(service))
}

/// Serve the OpenAPI document at `GET /openapi.json`.
#[must_use]
pub fn register_docs(router: Router) -> Router {
    router.route("/openapi.json", get(|| async { Json(openapi()) }))
}
