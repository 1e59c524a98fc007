use thiserror::Error;

use crate::config::BackendKind;
use crate::session::SessionError;

/// Top-level error type for the edbgeo client core.
#[derive(Debug, Error)]
pub enum EdbGeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("invalid contour: {0}")]
    InvalidContour(String),
}

/// Errors raised by a computation backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend exists but does not implement this operation.
    #[error("{backend} backend: {operation} is not yet implemented")]
    Unsupported {
        backend: BackendKind,
        operation: &'static str,
    },

    /// The backend's third-party library is not compiled in.
    #[error(
        "{backend} backend requires the `{crate_name}` crate; \
         enable the `{feature}` cargo feature or select the server backend"
    )]
    MissingDependency {
        backend: BackendKind,
        crate_name: &'static str,
        feature: &'static str,
    },

    /// A server-delegating operation was requested without a service handle.
    #[error("{operation} requires a remote polygon service handle")]
    NoService { operation: &'static str },
}

/// Errors related to backend configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown computation backend: {0:?}")]
    UnknownBackend(String),
}

/// Errors surfaced by the remote polygon service collaborator.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service implementation does not answer this procedure.
    #[error("remote service: {operation} is unavailable")]
    Unavailable { operation: &'static str },

    #[error("remote service call failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`EdbGeoError`].
pub type Result<T> = std::result::Result<T, EdbGeoError>;
