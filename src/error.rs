use thiserror::Error;

/// Top-level error type for the c1map kernel.
#[derive(Debug, Error)]
pub enum C1MapError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Faults raised for configurations this kernel deliberately does not handle.
///
/// These indicate a configuration or programming error in the caller, never
/// a transient condition; retrying with the same input cannot succeed.
#[derive(Debug, Error)]
pub enum UnsupportedError {
    #[error("edge support points are undefined in dimension {dim}")]
    EdgeSupportPoints { dim: u32 },

    #[error("face-interior support points are not implemented in dimension {dim}")]
    FaceSupportPoints { dim: u32 },
}

/// Errors related to geometric preconditions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate edge: endpoints coincide")]
    DegenerateEdge,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`C1MapError`].
pub type Result<T> = std::result::Result<T, C1MapError>;
