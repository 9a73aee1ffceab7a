//! Engine error types.

use fingenius_math::MathError;
use fingenius_portfolio::PortfolioError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error type.
///
/// Collaborator failures never surface here; they are replaced by fallback
/// values inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid caller input (bad holding, symbol or override)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A metric could not be computed or was not finite
    #[error("calculation error: {0}")]
    Calculation(String),
}

impl EngineError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<PortfolioError> for EngineError {
    fn from(e: PortfolioError) -> Self {
        match e {
            PortfolioError::InvalidHolding { .. } => Self::InvalidInput(e.to_string()),
            PortfolioError::InvalidConfig { .. } => Self::Config(e.to_string()),
            PortfolioError::CalculationFailed { .. } => Self::Calculation(e.to_string()),
        }
    }
}

impl From<MathError> for EngineError {
    fn from(e: MathError) -> Self {
        Self::Calculation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_error_mapping() {
        let err: EngineError = PortfolioError::invalid_holding("AAPL", "negative quantity").into();
        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert!(err.to_string().contains("AAPL"));

        let err: EngineError = PortfolioError::calculation_failed("volatility is not finite").into();
        assert!(matches!(err, EngineError::Calculation(_)));

        let err: EngineError = PortfolioError::invalid_config("bad").into();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_math_error_mapping() {
        let err: EngineError = MathError::non_finite("quadratic form").into();
        assert!(matches!(err, EngineError::Calculation(_)));
    }
}
