pub mod arc;
pub mod bbox;
pub mod polygon;
pub mod vertex;

pub use arc::ArcData;
pub use bbox::BBox;
pub use polygon::{PolygonData, PolygonSense};
pub use vertex::Vertex;
