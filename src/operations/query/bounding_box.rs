use crate::math::{Matrix4, Point3, Vector3};
use crate::solid::{BooleanOp, Node, Solid};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// A box spanning `-half..half` on every axis.
    #[must_use]
    pub fn centered(half: Vector3) -> Self {
        Self {
            min: Point3::from(-half),
            max: Point3::from(half),
        }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Overlap of both boxes, or `None` when they are disjoint.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        let min = self.min.sup(&other.min);
        let max = self.max.inf(&other.max);
        (min.x <= max.x && min.y <= max.y && min.z <= max.z).then_some(Self { min, max })
    }

    /// Bounds of the eight corners after applying `matrix`.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        let corners = (0..8u8).map(|i| {
            Point3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        });
        let mut placed = corners.map(|c| matrix.transform_point(&c));
        let first = placed.next().unwrap_or(self.min);
        placed.fold(Self { min: first, max: first }, |acc, p| Self {
            min: acc.min.inf(&p),
            max: acc.max.sup(&p),
        })
    }
}

/// Computes the axis-aligned bounding box of a solid.
///
/// Bounds are conservative: a subtraction keeps the bounds of its minuend
/// and an intersection the overlap of its operands' bounds.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB or `None` if the solid is
    /// provably empty.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        bounds_of(self.solid)
    }
}

fn bounds_of(solid: &Solid) -> Option<Aabb> {
    match solid.node() {
        Node::Primitive(p) => Some(p.bounds()),
        Node::Transform { matrix, child, .. } => {
            bounds_of(child).map(|b| b.transformed(matrix))
        }
        Node::Extrude { height, profile } => bounds_of(profile).map(|b| Aabb {
            min: Point3::new(b.min.x, b.min.y, 0.0),
            max: Point3::new(b.max.x, b.max.y, *height),
        }),
        Node::Boolean { op, operands } => {
            let mut all = operands.iter().map(bounds_of);
            match op {
                BooleanOp::Union => all
                    .flatten()
                    .reduce(|acc, b| acc.merge(&b)),
                BooleanOp::Subtract => all.next().flatten(),
                BooleanOp::Intersect => {
                    let first = all.next().flatten()?;
                    all.try_fold(first, |acc, b| acc.overlap(&b?))
                }
            }
        }
    }
}
