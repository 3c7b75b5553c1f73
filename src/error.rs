use thiserror::Error;

/// Top-level error type for canvas clipping.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} is not finite ({value})")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors in the canvas configuration.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas {dimension} must be positive and finite, got {value}")]
    InvalidDimension { dimension: &'static str, value: f64 },
}

/// Convenience type alias for results using [`ClipError`].
pub type Result<T> = std::result::Result<T, ClipError>;

/// Rejects NaN and infinite values for the named parameter.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { parameter, value }.into())
    }
}
