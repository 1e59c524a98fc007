//! Client-side polygon geometry core for an EDB RPC client.
//!
//! The remote electronic-design-database engine does the heavy lifting;
//! this crate provides the pieces the client computes locally: sagitta-encoded
//! arc tessellation, arc-marker-aware contour flattening, and a pluggable
//! computation backend for polygon queries (remote delegate, planar geometry
//! library, or constrained-Delaunay triangulation kernel).

pub mod backends;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod session;
pub mod tessellation;

pub use backends::{BackendSelector, IntersectionType, PolygonBackend, PolygonService, ServerBackend};
pub use config::{BackendConfig, BackendKind};
pub use error::{EdbGeoError, Result};
pub use geometry::{ArcData, BBox, PolygonData, PolygonSense, Vertex};
pub use tessellation::TessellationParams;
