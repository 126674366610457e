use thiserror::Error;

pub type DiagramResult<T> = Result<T, DiagramError>;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("invalid axis domain: min={min}, max={max} (min must be < max)")]
    InvalidAxisDomain { min: f64, max: f64 },

    #[error("invalid tick interval: {interval} (must be finite and > 0)")]
    InvalidTickInterval { interval: f64 },

    #[error("categorical axis requires at least one category")]
    InvalidCategories,

    #[error(
        "unsupported non-terminating tick interval: {interval} \
         (not a finite decimal, rational third/sixth, or known multiple of pi)"
    )]
    UnsupportedTickInterval { interval: f64 },

    #[error("invalid chart dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid spec: {0}")]
    InvalidSpec(String),
}
