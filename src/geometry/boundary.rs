use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Narrow interface to a boundary/manifold description.
///
/// The mapping kernel needs exactly one capability from a boundary: the pair
/// of outward unit normals at an edge's two endpoints. Implementations own
/// whatever curve representation they like; the curve-fit solver never sees
/// past this trait.
pub trait BoundaryDescriptor {
    /// Returns the outward unit normals at `v0` and `v1`, in that order.
    ///
    /// Both endpoints are assumed to lie on the boundary described by `self`.
    fn vertex_normals(&self, v0: &Point2, v1: &Point2) -> [Vector2; 2];
}

/// A circular boundary whose normals point radially away from the center.
#[derive(Debug, Clone)]
pub struct CircularBoundary {
    center: Point2,
    radius: f64,
}

impl CircularBoundary {
    /// Creates a circular boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("boundary radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the boundary circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the boundary circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl BoundaryDescriptor for CircularBoundary {
    fn vertex_normals(&self, v0: &Point2, v1: &Point2) -> [Vector2; 2] {
        [(v0 - self.center).normalize(), (v1 - self.center).normalize()]
    }
}
