use crate::domain::error::DomainError;

/// A validated calculation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    file: String,
    product: String,
}

impl CalculationRequest {
    /// Build a request from the optional fields of an inbound body.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] when `file` is missing or empty,
    /// or when `product` is missing. The error keeps `file` when it was given.
    pub fn new(file: Option<String>, product: Option<String>) -> Result<Self, DomainError> {
        let Some(file) = file else {
            return Err(DomainError::invalid_input(None, "missing file parameter"));
        };
        if file.is_empty() {
            return Err(DomainError::invalid_input(Some(file), "empty file parameter"));
        }
        let Some(product) = product else {
            return Err(DomainError::invalid_input(
                Some(file),
                "missing product parameter",
            ));
        };
        Ok(Self { file, product })
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Product key to match. May be empty, in which case it is matched literally.
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }
}

/// One data row of a CSV document: exactly two trimmed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvRow<'a> {
    pub key: &'a str,
    pub quantity: &'a str,
}

impl<'a> CsvRow<'a> {
    /// Split `line` on commas and trim each field.
    ///
    /// # Errors
    /// Returns the number of fields found when it is not exactly two.
    pub fn parse(line: &'a str) -> Result<Self, usize> {
        let mut fields = line.split(',').map(str::trim);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(key), Some(quantity), None) => Ok(Self { key, quantity }),
            (_, Some(_), Some(_)) => Err(3 + fields.count()),
            _ => Err(1),
        }
    }
}
