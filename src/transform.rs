use std::ops::Mul;

use tracing::{debug, trace};

use crate::{point::Vertex, polygon::Polygon};

/// Pixels of pointer travel per unit of shear.
pub const SHEAR_SCALE: f64 = 100.0;
/// Reference distances at or below this are treated as zero.
pub const TRANSFORM_EPSILON: f64 = 1e-9;

/// A 3×3 homogeneous matrix, row major. Points are column vectors
/// `(x, y, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub m: [[f64; 3]; 3],
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn translate(dx: f64, dy: f64) -> Self {
        Self {
            m: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }

    /// Rotation by `angle` radians about `anchor`.
    pub fn rotate_about(anchor: Vertex, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let Vertex { x: ax, y: ay } = anchor;
        Self {
            m: [
                [cos, -sin, ax * (1.0 - cos) + ay * sin],
                [sin, cos, ay * (1.0 - cos) - ax * sin],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Uniform scale by `factor` with `anchor` held fixed.
    pub fn scale_about(anchor: Vertex, factor: f64) -> Self {
        Self {
            m: [
                [factor, 0.0, anchor.x * (1.0 - factor)],
                [0.0, factor, anchor.y * (1.0 - factor)],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// `x' = x + shx * (y - anchor.y)`, `y' = y + shy * (x - anchor.x)`.
    /// The anchor's row and column stay put.
    pub fn shear_about(anchor: Vertex, shx: f64, shy: f64) -> Self {
        Self {
            m: [
                [1.0, shx, -anchor.y * shx],
                [shy, 1.0, -anchor.x * shy],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Homogeneous product; the third coordinate is dropped.
    pub fn apply(&self, v: Vertex) -> Vertex {
        let [r0, r1, _] = self.m;
        Vertex::new(
            r0[0] * v.x + r0[1] * v.y + r0[2],
            r1[0] * v.x + r1[1] * v.y + r1[2],
        )
    }

    pub fn apply_to(&self, polygon: &mut Polygon) {
        for v in polygon.vertices_mut() {
            *v = self.apply(*v);
        }
    }
}

impl Mul for Affine {
    type Output = Affine;

    /// `(self * rhs).apply(v) == self.apply(rhs.apply(v))`.
    fn mul(self, rhs: Affine) -> Affine {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Affine { m }
    }
}

/// A single transform request, with its kind-specific delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate { dx: f64, dy: f64 },
    Rotate { anchor: Vertex, angle: f64 },
    Scale { anchor: Vertex, factor: f64 },
    Shear { anchor: Vertex, shx: f64, shy: f64 },
}

impl Transform {
    /// Rotation by the angle swept from `from` to `to` as seen from
    /// `anchor`.
    pub fn rotate_between(anchor: Vertex, from: Vertex, to: Vertex) -> Self {
        Transform::Rotate {
            anchor,
            angle: to.angle_from(&anchor) - from.angle_from(&anchor),
        }
    }

    /// Scale by the ratio of the distances of `to` and `from` from
    /// `anchor`. A reference point on top of the anchor gives the identity.
    pub fn scale_between(anchor: Vertex, from: Vertex, to: Vertex) -> Self {
        let reference = from.distance(&anchor);
        let factor = if reference <= TRANSFORM_EPSILON {
            debug!(?anchor, ?from, "zero reference distance, not scaling");
            1.0
        } else {
            to.distance(&anchor) / reference
        };
        Transform::Scale { anchor, factor }
    }

    /// Shear by the pointer travel from `from` to `to`, normalized by
    /// [`SHEAR_SCALE`].
    pub fn shear_between(anchor: Vertex, from: Vertex, to: Vertex) -> Self {
        Transform::Shear {
            anchor,
            shx: (to.x - from.x) / SHEAR_SCALE,
            shy: (to.y - from.y) / SHEAR_SCALE,
        }
    }

    pub fn matrix(&self) -> Affine {
        match *self {
            Transform::Translate { dx, dy } => Affine::translate(dx, dy),
            Transform::Rotate { anchor, angle } => {
                Affine::rotate_about(anchor, angle)
            }
            Transform::Scale { anchor, factor } => {
                Affine::scale_about(anchor, factor)
            }
            Transform::Shear { anchor, shx, shy } => {
                Affine::shear_about(anchor, shx, shy)
            }
        }
    }
}

/// Apply `transform` to every vertex of `polygon` in place.
pub fn apply_transform<'a>(
    polygon: &'a mut Polygon,
    transform: &Transform,
) -> &'a mut Polygon {
    let matrix = transform.matrix();
    trace!(?transform, ?matrix, "applying transform");
    matrix.apply_to(polygon);
    polygon
}
