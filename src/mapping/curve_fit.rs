use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Local coordinate frame of an edge: the rotation, scaling and shift that
/// carry the unit interval on the local x-axis onto the chord `v0 -> v1`.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFrame {
    origin: Point2,
    alpha: f64,
    h: f64,
}

impl EdgeFrame {
    /// Builds the local frame of the edge from `v0` to `v1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide (zero chord length).
    pub fn new(v0: Point2, v1: Point2) -> Result<Self> {
        let chord = v1 - v0;
        let h = chord.norm();
        if h < TOLERANCE {
            return Err(GeometryError::DegenerateEdge.into());
        }
        let axis = chord / h;
        Ok(Self {
            origin: v0,
            alpha: axis.y.atan2(axis.x),
            h,
        })
    }

    /// Rotation angle aligning the chord with the local x-axis.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Chord length of the edge.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        self.h
    }

    /// Maps a point from local chord coordinates to global coordinates by
    /// rotating, scaling and shifting.
    #[must_use]
    pub fn to_global(&self, local: Point2) -> Point2 {
        let (sin_a, cos_a) = self.alpha.sin_cos();
        let rotated = Vector2::new(
            cos_a * local.x - sin_a * local.y,
            sin_a * local.x + cos_a * local.y,
        );
        self.origin + rotated * self.h
    }
}

/// Coefficients of the cubic deviation `s(t) = a*t^3 + b*t^2 + c*t + d`
/// describing a boundary edge in its local frame.
///
/// Both endpoints lie on the chord, so `d = 0` and `a = -b - c` hold by
/// construction; only `b` and `c` are stored.
#[derive(Debug, Clone, Copy)]
pub struct CubicFit {
    b: f64,
    c: f64,
}

impl CubicFit {
    /// Fits the cubic so that the curve's tangents at `t = 0` and `t = 1`
    /// are orthogonal to the outward boundary normals `n0` and `n1`.
    ///
    /// In the local frame the tangent directions are `(1, c)` at `t = 0` and
    /// `(1, -b - 2c)` at `t = 1`; expressing the normals in the rotated frame
    /// and requiring orthogonality determines `c` and `b`.
    ///
    /// Precondition: neither normal is (near-)parallel to the edge tangent.
    /// The denominators below vanish in that case and the coefficients come
    /// out non-finite; no defensive check is performed here.
    #[must_use]
    pub fn from_normals(frame: &EdgeFrame, n0: &Vector2, n1: &Vector2) -> Self {
        let (sin_a, cos_a) = frame.alpha().sin_cos();
        let c = -((n0.y * sin_a + n0.x * cos_a) / (n0.y * cos_a - n0.x * sin_a));
        let b = ((n1.y * sin_a + n1.x * cos_a) / (n1.y * cos_a - n1.x * sin_a)) - 2.0 * c;
        Self { b, c }
    }

    /// Cubic coefficient, `-b - c` by the endpoint condition at `t = 1`.
    #[must_use]
    pub fn a(&self) -> f64 {
        -self.b - self.c
    }

    /// Quadratic coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Linear coefficient; also the local slope at `t = 0`.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Constant coefficient; zero because the endpoints sit on the chord.
    #[must_use]
    pub fn d(&self) -> f64 {
        0.0
    }

    /// Evaluates the perpendicular deviation `s(t)`, in Horner form.
    #[must_use]
    pub fn deviation(&self, t: f64) -> f64 {
        (((-self.b - self.c) * t + self.b) * t + self.c) * t
    }
}
