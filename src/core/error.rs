//! Failure taxonomy surfaced by the conversion service.

use thiserror::Error;

/// Discriminant of a [`ConversionError`], for exhaustive handling at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCurrency,
    InvalidAmount,
    UpstreamApi,
    Network,
    Conversion,
}

/// Errors returned by [`crate::service::ConversionService`].
///
/// Input errors (`InvalidCurrency`, `InvalidAmount`) are raised before any I/O.
/// None of the variants are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Currency code outside the supported set.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Amount is not a strictly positive number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The provider answered but reported failure or omitted the rate.
    #[error("Rate provider error: {0}")]
    UpstreamApi(String),

    /// Transport failure: timeout, connection error, bad status or malformed payload.
    #[error("Network error: {0}")]
    Network(String),

    /// Anything not covered above.
    #[error("Conversion failed: {0}")]
    Conversion(String),
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InvalidCurrency(_) => ErrorKind::InvalidCurrency,
            ConversionError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            ConversionError::UpstreamApi(_) => ErrorKind::UpstreamApi,
            ConversionError::Network(_) => ErrorKind::Network,
            ConversionError::Conversion(_) => ErrorKind::Conversion,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ConversionError::InvalidCurrency(msg)
            | ConversionError::InvalidAmount(msg)
            | ConversionError::UpstreamApi(msg)
            | ConversionError::Network(msg)
            | ConversionError::Conversion(msg) => msg,
        }
    }
}

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_message() {
        let err = ConversionError::UpstreamApi("quota exceeded".to_string());
        assert_eq!(err.kind(), ErrorKind::UpstreamApi);
        assert_eq!(err.message(), "quota exceeded");
        assert_eq!(err.to_string(), "Rate provider error: quota exceeded");

        let err = ConversionError::Network("timed out".to_string());
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.to_string(), "Network error: timed out");
    }
}
