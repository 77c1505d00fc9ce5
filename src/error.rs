use thiserror::Error;

/// Top-level error type for the Fractalis model generators.
#[derive(Debug, Error)]
pub enum FractalError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to fractal shape parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to the model catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("model not found in catalog")]
    ModelNotFound,
}

/// Errors related to operations on finished models.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`FractalError`].
pub type Result<T> = std::result::Result<T, FractalError>;
