use crate::math::Point2;

use super::boundary::BoundaryDescriptor;

/// How an edge relates to the domain boundary.
#[derive(Clone, Copy)]
pub enum EdgeKind<'a> {
    /// An interior edge; support points subdivide the straight chord.
    Interior,
    /// A boundary edge, curved according to the referenced descriptor.
    Boundary(&'a dyn BoundaryDescriptor),
}

/// A single cell edge as seen by the mapping kernel: two physical-space
/// endpoints and a boundary classification.
///
/// Edges borrow their boundary descriptor; nothing here owns geometry.
#[derive(Clone, Copy)]
pub struct Edge<'a> {
    /// First endpoint.
    pub v0: Point2,
    /// Second endpoint.
    pub v1: Point2,
    /// Interior or boundary classification.
    pub kind: EdgeKind<'a>,
}

impl<'a> Edge<'a> {
    /// Creates an interior (straight) edge.
    #[must_use]
    pub fn interior(v0: Point2, v1: Point2) -> Self {
        Self {
            v0,
            v1,
            kind: EdgeKind::Interior,
        }
    }

    /// Creates a boundary edge curved by `descriptor`.
    #[must_use]
    pub fn boundary(v0: Point2, v1: Point2, descriptor: &'a dyn BoundaryDescriptor) -> Self {
        Self {
            v0,
            v1,
            kind: EdgeKind::Boundary(descriptor),
        }
    }

    /// Returns whether this edge lies on the boundary.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(self.kind, EdgeKind::Boundary(_))
    }
}

/// A quadrilateral cell: four edges in a fixed enumeration order.
///
/// The kernel only reads the edges; ownership of vertices and boundary
/// descriptors stays with the caller's mesh.
#[derive(Clone, Copy)]
pub struct QuadCell<'a> {
    /// The cell's edges, processed in index order.
    pub edges: [Edge<'a>; 4],
}

impl<'a> QuadCell<'a> {
    /// Creates a cell from its four edges.
    #[must_use]
    pub fn new(edges: [Edge<'a>; 4]) -> Self {
        Self { edges }
    }
}
