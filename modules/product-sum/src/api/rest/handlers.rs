//! REST handlers for the product sum module.
//!
//! Handlers are thin: parse the body, call the domain service, map errors.

use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::{error, info};

use super::dto::{CalculateProductRequest, ErrorDto, HealthResponse, ProductSumDto};
use super::error::ApiError;
use crate::domain::service::ProductSumService;

/// POST /calculate-product - Sum the quantities of one product in a CSV file.
///
/// An unreadable body is handled like a body without `file`. Fields are read
/// one at a time, so a usable `file` is echoed even when `product` is not.
#[utoipa::path(
    post,
    path = "/calculate-product",
    tag = "Product Sum",
    request_body = CalculateProductRequest,
    responses(
        (status = 200, description = "Sum of matching quantities", body = ProductSumDto),
        (status = 400, description = "Invalid request or malformed CSV", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "File could not be processed", body = ErrorDto),
    )
)]
#[tracing::instrument(skip(svc, payload))]
pub async fn calculate_product(
    Extension(svc): Extension<Arc<ProductSumService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProductSumDto>, ApiError> {
    info!("Received request to /calculate-product");

    let body = match payload {
        Ok(Json(value)) => CalculateProductRequest::from_json(&value),
        Err(rejection) => {
            error!(error = %rejection.body_text(), "Unreadable JSON body");
            CalculateProductRequest::default()
        }
    };

    let request = body.into_calculation_request().map_err(|e| {
        error!(error = %e, "Invalid JSON input");
        e
    })?;

    let sum = svc.calculate(&request).await?;

    Ok(Json(ProductSumDto {
        file: request.file().to_owned(),
        sum,
    }))
}

/// GET /health - Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Product Sum",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
