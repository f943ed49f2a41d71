pub mod aggregate;
pub mod error;
pub mod model;
pub mod service;

pub use aggregate::*;
pub use error::*;
pub use model::*;
pub use service::*;

#[cfg(test)]
mod service_test;
