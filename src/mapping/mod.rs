mod curve_fit;
mod support_points;

pub use curve_fit::{CubicFit, EdgeFrame};
pub use support_points::{add_edge_support_points, add_face_support_points, edge_support_points};

/// Spatial dimension tag for the mapping kernel.
///
/// C1 cubic edges are only defined for planar cells; the `One` variant exists
/// so callers dispatching on a mesh dimension hit an explicit fault instead
/// of a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// One-dimensional meshes. Edge support points are undefined here.
    One,
    /// Two-dimensional planar meshes.
    Two,
}

impl Dimension {
    /// Returns the dimension as a plain integer.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Interior abscissae of the 4-point Gauss-Lobatto rule on `[0, 1]`,
/// in increasing order.
///
/// The outer two Gauss-Lobatto points coincide with the edge endpoints, so
/// only these two contribute new support points.
#[must_use]
pub fn interior_gl_points() -> [f64; 2] {
    let half_width = 0.5 * (1.0_f64 / 5.0).sqrt();
    [0.5 - half_width, 0.5 + half_width]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_points_are_symmetric_and_interior() {
        let [t1, t2] = interior_gl_points();
        assert!(0.0 < t1 && t1 < t2 && t2 < 1.0);
        assert!((t1 + t2 - 1.0).abs() < 1e-15);
        assert!((t1 - 0.276_393_202_250_021).abs() < 1e-12, "t1={t1}");
    }
}
