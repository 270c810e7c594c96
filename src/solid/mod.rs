pub mod color;
pub mod primitive;

pub use color::Color;
pub use primitive::Primitive;

use std::sync::Arc;

use crate::error::Result;
use crate::math::{Matrix4, Point3, Vector3};
use crate::operations::boolean::{Intersect, Subtract, Union};
use crate::operations::query::{classify_point_in_solid, Aabb, BoundingBox, PointClassification};
use crate::operations::shaping::Extrude;
use crate::operations::transform::{Rotate, Translate};

/// Whether a solid is a planar region or a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    /// Number of spatial dimensions.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

/// A node of the construction tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A primitive shape in its canonical placement.
    Primitive(Primitive),
    /// An affine placement of a child solid.
    Transform {
        matrix: Matrix4,
        /// Cached inverse of `matrix`, used for point queries.
        inverse: Matrix4,
        child: Solid,
    },
    /// A boolean combination. For `Subtract` the first operand is the minuend.
    Boolean { op: BooleanOp, operands: Vec<Solid> },
    /// A 2-D profile lifted along +Z from `z = 0` to `z = height`.
    Extrude { height: f64, profile: Solid },
}

/// An immutable 2-D region or 3-D volume, optionally tagged with a color.
///
/// Solids are cheap to clone: the construction tree is shared. Every
/// operation returns a new solid and leaves its inputs untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    node: Arc<Node>,
    color: Option<Color>,
}

impl Solid {
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
            color: None,
        }
    }

    /// The root node of the construction tree.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The color tag, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Whether this solid is a planar region or a volume.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self.node() {
            Node::Primitive(p) => p.dimension(),
            Node::Transform { child, .. } => child.dimension(),
            Node::Boolean { operands, .. } => operands
                .first()
                .map_or(Dimension::Three, Solid::dimension),
            Node::Extrude { .. } => Dimension::Three,
        }
    }

    /// Returns a copy of this solid tagged with `color`.
    #[must_use]
    pub fn colorize(&self, color: Color) -> Self {
        Self {
            node: Arc::clone(&self.node),
            color: Some(color),
        }
    }

    /// Translates this solid. 2-D regions only accept in-plane offsets.
    ///
    /// # Errors
    ///
    /// Returns an error if a 2-D region would leave the XY plane.
    pub fn translate(&self, offset: Vector3) -> Result<Self> {
        Translate::new(self, offset).execute()
    }

    /// Rotates this solid about the origin by XYZ Euler angles (radians).
    ///
    /// # Errors
    ///
    /// Returns an error if a 2-D region would be rotated out of the XY plane.
    pub fn rotate(&self, angles: Vector3) -> Result<Self> {
        Rotate::new(self, angles).execute()
    }

    /// Boolean union with another solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands have different dimensions.
    pub fn union(&self, other: &Self) -> Result<Self> {
        Union::new(self, other).execute()
    }

    /// Removes `other` from this solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands have different dimensions.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Subtract::new(self, other).execute()
    }

    /// Boolean intersection with another solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands have different dimensions.
    pub fn intersect(&self, other: &Self) -> Result<Self> {
        Intersect::new(self, other).execute()
    }

    /// Extrudes this 2-D region along +Z.
    ///
    /// # Errors
    ///
    /// Returns an error if the height is not positive or this is not a 2-D region.
    pub fn extrude(&self, height: f64) -> Result<Self> {
        Extrude::new(self, height).execute()
    }

    /// Axis-aligned bounds, or `None` for a provably empty solid.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        BoundingBox::new(self).execute()
    }

    /// Returns `true` if `point` lies inside the solid or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        classify_point_in_solid(point, self) == PointClassification::Inside
    }
}
