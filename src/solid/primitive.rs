use crate::math::{Point3, Vector2, Vector3, TOLERANCE};
use crate::operations::query::Aabb;

use super::Dimension;

/// A primitive shape in its canonical placement.
///
/// Every primitive is centered on the origin. Curved primitives keep the
/// segment count the downstream tessellator should use; point and bounds
/// queries treat them analytically.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A disc in the XY plane.
    Circle { radius: f64, segments: u32 },
    /// An axis-aligned rectangle in the XY plane.
    Rectangle { size: Vector2 },
    /// A rectangle with filleted corners in the XY plane.
    RoundedRectangle {
        size: Vector2,
        round_radius: f64,
        segments: u32,
    },
    /// An axis-aligned box.
    Cuboid { size: Vector3 },
    /// A Z-axis cylinder spanning `[-height / 2, height / 2]`.
    Cylinder {
        radius: f64,
        height: f64,
        segments: u32,
    },
    /// A Z-axis cylinder whose rim edges are rounded.
    RoundedCylinder {
        radius: f64,
        height: f64,
        round_radius: f64,
        segments: u32,
    },
    /// A ball.
    Sphere { radius: f64, segments: u32 },
}

impl Primitive {
    /// Whether the primitive is planar or volumetric.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Circle { .. } | Self::Rectangle { .. } | Self::RoundedRectangle { .. } => {
                Dimension::Two
            }
            Self::Cuboid { .. }
            | Self::Cylinder { .. }
            | Self::RoundedCylinder { .. }
            | Self::Sphere { .. } => Dimension::Three,
        }
    }

    /// Exact axis-aligned bounds of the primitive.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let half = match self {
            Self::Circle { radius, .. } => Vector3::new(*radius, *radius, 0.0),
            Self::Rectangle { size } | Self::RoundedRectangle { size, .. } => {
                Vector3::new(size.x / 2.0, size.y / 2.0, 0.0)
            }
            Self::Cuboid { size } => size / 2.0,
            Self::Cylinder { radius, height, .. }
            | Self::RoundedCylinder { radius, height, .. } => {
                Vector3::new(*radius, *radius, height / 2.0)
            }
            Self::Sphere { radius, .. } => Vector3::new(*radius, *radius, *radius),
        };
        Aabb::centered(half)
    }

    /// Returns `true` if `p` lies inside the primitive or on its boundary.
    ///
    /// Planar primitives ignore the Z coordinate.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        match self {
            Self::Circle { radius, .. } => p.x.hypot(p.y) <= radius + TOLERANCE,
            Self::Rectangle { size } => {
                within(p.x, size.x / 2.0) && within(p.y, size.y / 2.0)
            }
            Self::RoundedRectangle {
                size, round_radius, ..
            } => {
                let (hx, hy) = (size.x / 2.0, size.y / 2.0);
                within(p.x, hx)
                    && within(p.y, hy)
                    && in_rounded_corner(
                        p.x.abs() - (hx - round_radius),
                        p.y.abs() - (hy - round_radius),
                        *round_radius,
                    )
            }
            Self::Cuboid { size } => {
                within(p.x, size.x / 2.0) && within(p.y, size.y / 2.0) && within(p.z, size.z / 2.0)
            }
            Self::Cylinder { radius, height, .. } => {
                p.x.hypot(p.y) <= radius + TOLERANCE && within(p.z, height / 2.0)
            }
            Self::RoundedCylinder {
                radius,
                height,
                round_radius,
                ..
            } => {
                let rho = p.x.hypot(p.y);
                rho <= radius + TOLERANCE
                    && within(p.z, height / 2.0)
                    && in_rounded_corner(
                        rho - (radius - round_radius),
                        p.z.abs() - (height / 2.0 - round_radius),
                        *round_radius,
                    )
            }
            Self::Sphere { radius, .. } => p.coords.norm() <= radius + TOLERANCE,
        }
    }
}

fn within(value: f64, half: f64) -> bool {
    value.abs() <= half + TOLERANCE
}

/// Corner test for a fillet of radius `r`; `(qx, qy)` is the offset past the
/// fillet centre along both axes.
fn in_rounded_corner(qx: f64, qy: f64, r: f64) -> bool {
    qx <= 0.0 || qy <= 0.0 || qx.hypot(qy) <= r + TOLERANCE
}
