pub mod boundary;
pub mod edge;

pub use boundary::{BoundaryDescriptor, CircularBoundary};
pub use edge::{Edge, EdgeKind, QuadCell};
