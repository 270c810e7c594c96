use thiserror::Error;

/// Top-level error type for enclosure generation.
#[derive(Debug, Error)]
pub enum EnclosureError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while resolving the configuration, before any solid is built.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{field} = {value} must be strictly positive")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    #[error("{feature} reaches {extent} mm but its footprint ends at {limit} mm")]
    CutoutOutsideFootprint {
        feature: &'static str,
        extent: f64,
        limit: f64,
    },

    #[error("invalid parameter set: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the solid combinators.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("cannot combine a {left}-D region with a {right}-D region")]
    DimensionMismatch { left: u8, right: u8 },

    #[error("transform matrix is singular")]
    SingularTransform,
}

/// Convenience type alias for results using [`EnclosureError`].
pub type Result<T> = std::result::Result<T, EnclosureError>;
