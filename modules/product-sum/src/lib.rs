//! Product Sum Module
//!
//! Reads a named CSV file from a configured data directory and sums the
//! integer quantities recorded for one product key.
//!
//! ## Architecture
//!
//! ```text
//!   POST /calculate-product
//!             │
//!             ▼
//! ┌────────────────────────────┐
//! │  REST API (api::rest)      │  DTOs, handler, error mapping
//! └────────────────────────────┘
//!             │
//!             ▼
//! ┌────────────────────────────┐
//! │  ProductSumService         │  path resolution, file read
//! └────────────────────────────┘
//!             │
//!             ▼
//! ┌────────────────────────────┐
//! │  aggregate()               │  CSV validation + summation
//! └────────────────────────────┘
//! ```

pub mod config;
pub use config::ProductSumConfig;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;

pub use api::rest::routes::{register_docs, register_routes};
pub use domain::service::{ProductSumService, ServiceConfig};
