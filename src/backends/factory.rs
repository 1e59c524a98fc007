//! Backend selection and caching.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::{BackendConfig, BackendKind};
use crate::error::{BackendError, Result};

use super::{PolygonBackend, PolygonService, ServerBackend};

/// Picks and caches the computation backend for a client.
///
/// There is no process-wide selection; each selector is an explicit object
/// an embedding constructs and passes around, so two clients can run on
/// different backends in the same process. The first [`backend`] call
/// builds the backend, later calls return the cached instance until
/// [`reset`] drops it.
///
/// [`backend`]: BackendSelector::backend
/// [`reset`]: BackendSelector::reset
pub struct BackendSelector {
    config: BackendConfig,
    service: Option<Arc<dyn PolygonService>>,
    cached: Mutex<Option<Arc<dyn PolygonBackend>>>,
}

impl BackendSelector {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            service: None,
            cached: Mutex::new(None),
        }
    }

    /// Selector configured from `EDBGEO_COMPUTATION_BACKEND`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    /// Attaches the remote service handle the server backend delegates to.
    #[must_use]
    pub fn with_service(mut self, service: Arc<dyn PolygonService>) -> Self {
        self.service = Some(service);
        self
    }

    #[must_use]
    pub fn config(&self) -> BackendConfig {
        self.config
    }

    /// The selected backend, built on first use and cached afterwards.
    ///
    /// # Errors
    /// `NoService` when the server backend is selected (directly or via
    /// `Auto`) without a service handle; `MissingDependency` when a local
    /// backend's crate is not compiled in.
    pub fn backend(&self) -> Result<Arc<dyn PolygonBackend>> {
        let mut cached = self
            .cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(backend) = cached.as_ref() {
            return Ok(Arc::clone(backend));
        }
        let backend = self.build()?;
        tracing::debug!(backend = %backend.kind(), "selected computation backend");
        *cached = Some(Arc::clone(&backend));
        Ok(backend)
    }

    /// Restores the environment-derived default and drops the cached
    /// backend, so the next use rebuilds.
    pub fn reset(&mut self) {
        self.config = BackendConfig::from_env();
        let mut cached = self
            .cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *cached = None;
    }

    fn build(&self) -> Result<Arc<dyn PolygonBackend>> {
        match self.config.kind {
            // Auto currently means the authoritative server backend.
            BackendKind::Auto | BackendKind::Server => match &self.service {
                Some(service) => Ok(Arc::new(ServerBackend::new(Arc::clone(service)))),
                None => Err(BackendError::NoService {
                    operation: "server backend selection",
                }
                .into()),
            },
            BackendKind::Planar => Self::build_planar(),
            BackendKind::Triangulated => self.build_triangulated(),
        }
    }

    #[cfg(feature = "planar")]
    fn build_planar() -> Result<Arc<dyn PolygonBackend>> {
        Ok(Arc::new(super::planar::PlanarBackend::new()))
    }

    #[cfg(not(feature = "planar"))]
    fn build_planar() -> Result<Arc<dyn PolygonBackend>> {
        Err(BackendError::MissingDependency {
            backend: BackendKind::Planar,
            crate_name: "geo",
            feature: "planar",
        }
        .into())
    }

    #[cfg(feature = "triangulated")]
    fn build_triangulated(&self) -> Result<Arc<dyn PolygonBackend>> {
        use super::triangulated::TriangulatedBackend;
        Ok(Arc::new(match &self.service {
            Some(service) => TriangulatedBackend::with_service(Arc::clone(service)),
            None => TriangulatedBackend::new(),
        }))
    }

    #[cfg(not(feature = "triangulated"))]
    fn build_triangulated(&self) -> Result<Arc<dyn PolygonBackend>> {
        Err(BackendError::MissingDependency {
            backend: BackendKind::Triangulated,
            crate_name: "spade",
            feature: "triangulated",
        }
        .into())
    }
}
