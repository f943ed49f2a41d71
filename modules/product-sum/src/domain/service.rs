use std::path::{Component, Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

use crate::config::ProductSumConfig;
use crate::domain::aggregate::aggregate;
use crate::domain::error::DomainError;
use crate::domain::model::CalculationRequest;

/// Configuration for the product sum service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory requested filenames are resolved against. Reads never leave
    /// this directory.
    pub data_dir: PathBuf,
}

impl From<&ProductSumConfig> for ServiceConfig {
    fn from(cfg: &ProductSumConfig) -> Self {
        Self {
            data_dir: cfg.data_dir.clone(),
        }
    }
}

/// Reads CSV files from the data directory and sums product quantities.
///
/// Holds no mutable state; a single instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct ProductSumService {
    config: ServiceConfig,
}

impl ProductSumService {
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Sum the quantities recorded for `request.product()` in `request.file()`.
    ///
    /// # Errors
    /// - [`DomainError::NotFound`] if the file does not exist in the data directory
    /// - [`DomainError::MalformedInput`] if the file is not a valid two-column CSV
    /// - [`DomainError::ProcessingFailure`] on read failures or sum overflow
    #[instrument(skip(self, request), fields(file = %request.file(), product = %request.product()))]
    pub async fn calculate(&self, request: &CalculationRequest) -> Result<i64, DomainError> {
        info!("Calculating product sum");

        let file = request.file();
        let path = self.resolve_path(file).await?;

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            error!(error = %e, "Error processing file");
            DomainError::processing_failure(file, e.to_string())
        })?;

        let lines: Vec<&str> = content.trim().split('\n').collect();
        debug!(lines = lines.len(), "Read CSV document");

        let sum = aggregate(&lines, request.product()).map_err(|e| {
            error!(error = %e, "Rejected CSV document");
            DomainError::from_aggregation(file, e)
        })?;

        info!(sum, "Calculation complete");
        Ok(sum)
    }

    /// Resolve `file` inside the data directory.
    ///
    /// Absolute paths and `..` components are refused before touching the
    /// filesystem. Existing files are canonicalized so a symlink cannot point
    /// outside the data directory. Refused paths are reported as not found.
    async fn resolve_path(&self, file: &str) -> Result<PathBuf, DomainError> {
        let requested = Path::new(file);
        let escapes = requested
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            warn!("Rejected filename that escapes the data directory");
            return Err(DomainError::file_not_found(file));
        }

        let path = self.config.data_dir.join(requested);
        if !matches!(tokio::fs::try_exists(&path).await, Ok(true)) {
            error!("File not found");
            return Err(DomainError::file_not_found(file));
        }

        let base = tokio::fs::canonicalize(&self.config.data_dir)
            .await
            .map_err(|e| {
                error!(
                    data_dir = %self.config.data_dir.display(),
                    error = %e,
                    "Data directory is invalid"
                );
                DomainError::processing_failure(file, format!("invalid data directory: {e}"))
            })?;
        let canonical = tokio::fs::canonicalize(&path).await.map_err(|e| {
            error!(error = %e, "Failed to resolve file path");
            DomainError::processing_failure(file, e.to_string())
        })?;

        if !canonical.starts_with(&base) {
            warn!(
                path = %canonical.display(),
                base = %base.display(),
                "Rejected path outside the data directory"
            );
            return Err(DomainError::file_not_found(file));
        }

        Ok(canonical)
    }
}
