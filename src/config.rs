//! Backend selection configuration.
//!
//! The preferred backend is resolved once, at configuration time, from the
//! `EDBGEO_COMPUTATION_BACKEND` environment variable and can be overridden
//! programmatically per selector.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Environment variable naming the preferred computation backend.
pub const BACKEND_ENV_VAR: &str = "EDBGEO_COMPUTATION_BACKEND";

/// Which computation backend to use for polygon queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Defer the choice: use the server when a service handle is present.
    #[default]
    Auto,
    /// Delegate every operation to the remote polygon service.
    Server,
    /// Compute locally on tessellated contours with planar predicates.
    Planar,
    /// Compute locally on a constrained triangulation.
    Triangulated,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Server => "server",
            Self::Planar => "planar",
            Self::Triangulated => "triangulated",
        };
        f.write_str(name)
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "server" => Ok(Self::Server),
            "planar" => Ok(Self::Planar),
            "triangulated" => Ok(Self::Triangulated),
            other => Err(ConfigError::UnknownBackend(other.to_owned())),
        }
    }
}

/// Resolved backend preference for a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackendConfig {
    pub kind: BackendKind,
}

impl BackendConfig {
    #[must_use]
    pub fn new(kind: BackendKind) -> Self {
        Self { kind }
    }

    /// Reads the preference from [`BACKEND_ENV_VAR`].
    ///
    /// An unset variable and an unrecognized value both resolve to
    /// [`BackendKind::Auto`]; the latter is reported with a warning rather
    /// than an error so that a stale environment cannot brick the client.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(BACKEND_ENV_VAR) {
            Ok(raw) => match raw.parse::<BackendKind>() {
                Ok(kind) => Self { kind },
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        "unrecognized {BACKEND_ENV_VAR} value, falling back to auto"
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
