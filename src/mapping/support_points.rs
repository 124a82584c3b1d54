use tracing::trace;

use crate::error::{Result, UnsupportedError};
use crate::geometry::{Edge, EdgeKind, QuadCell};
use crate::math::Point2;

use super::curve_fit::{CubicFit, EdgeFrame};
use super::{interior_gl_points, Dimension};

/// Generates the two support points of a single edge, ordered by parameter.
///
/// Boundary edges get points on the C1 cubic fitted to the descriptor's
/// vertex normals; interior edges fall back to straight subdivision at the
/// same parameters, so the mapping degree stays uniform across the cell no
/// matter which edges touch the boundary.
///
/// # Errors
///
/// Returns an error if the edge is degenerate (coincident endpoints).
pub fn edge_support_points(edge: &Edge<'_>) -> Result<[Point2; 2]> {
    let [t1, t2] = interior_gl_points();

    match edge.kind {
        EdgeKind::Boundary(descriptor) => {
            let frame = EdgeFrame::new(edge.v0, edge.v1)?;
            let [n0, n1] = descriptor.vertex_normals(&edge.v0, &edge.v1);
            let fit = CubicFit::from_normals(&frame, &n0, &n1);
            Ok([
                frame.to_global(Point2::new(t1, fit.deviation(t1))),
                frame.to_global(Point2::new(t2, fit.deviation(t2))),
            ])
        }
        EdgeKind::Interior => {
            let chord = edge.v1 - edge.v0;
            Ok([edge.v0 + chord * t1, edge.v0 + chord * t2])
        }
    }
}

/// Appends the edge support points of a quadrilateral cell to `points`.
///
/// Edges are visited in the cell's fixed enumeration order; each contributes
/// two points, the one at the smaller parameter first.
///
/// # Errors
///
/// Returns [`UnsupportedError::EdgeSupportPoints`] for a one-dimensional
/// configuration, or a geometry error if an edge is degenerate.
pub fn add_edge_support_points(
    dim: Dimension,
    cell: &QuadCell<'_>,
    points: &mut Vec<Point2>,
) -> Result<()> {
    if dim != Dimension::Two {
        return Err(UnsupportedError::EdgeSupportPoints { dim: dim.as_u32() }.into());
    }

    for (edge_no, edge) in cell.edges.iter().enumerate() {
        let pair = edge_support_points(edge)?;
        trace!(edge_no, boundary = edge.is_boundary(), "edge support points");
        points.extend_from_slice(&pair);
    }
    Ok(())
}

/// Face-interior support points are not implemented in any dimension.
///
/// The C1 construction only defines extra points along edges; the interior
/// point of a quad is deliberately out of scope, so this always fails rather
/// than silently returning nothing.
///
/// # Errors
///
/// Always returns [`UnsupportedError::FaceSupportPoints`].
pub fn add_face_support_points(
    dim: Dimension,
    _cell: &QuadCell<'_>,
    _points: &mut Vec<Point2>,
) -> Result<()> {
    Err(UnsupportedError::FaceSupportPoints { dim: dim.as_u32() }.into())
}
