//! REST DTOs for the product sum module.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::error::DomainError;
use crate::domain::model::CalculationRequest;

/// Request body for `POST /calculate-product`.
///
/// Both fields are optional on the wire so a missing field can be reported
/// with the right payload instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CalculateProductRequest {
    /// Filename relative to the server's data directory.
    #[serde(default)]
    pub file: Option<String>,
    /// Product key to sum quantities for.
    #[serde(default)]
    pub product: Option<String>,
}

impl CalculateProductRequest {
    /// Pick `file` and `product` out of an arbitrary JSON body.
    ///
    /// Each field is read on its own: a field that is absent, `null` or not a
    /// string becomes `None` without affecting the other one.
    #[must_use]
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(ToOwned::to_owned);
        Self {
            file: field("file"),
            product: field("product"),
        }
    }

    /// Validate into the domain request.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] when `file` or `product` is missing.
    pub fn into_calculation_request(self) -> Result<CalculationRequest, DomainError> {
        CalculationRequest::new(self.file, self.product)
    }
}

/// Successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductSumDto {
    pub file: String,
    pub sum: i64,
}

/// Error payload. `file` is `null` when the request never named one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub file: Option<String>,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_owned(),
        }
    }
}
