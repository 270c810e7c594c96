use crate::error::Result;
use crate::math::Vector3;
use crate::solid::{Node, Primitive, Solid};

use super::require_positive;

/// Creates an axis-aligned box centered on the origin.
pub struct MakeCuboid {
    size: Vector3,
}

impl MakeCuboid {
    /// Creates a new `MakeCuboid` operation.
    #[must_use]
    pub fn new(size: Vector3) -> Self {
        Self { size }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if any side is not positive.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("cuboid width", self.size.x)?;
        require_positive("cuboid length", self.size.y)?;
        require_positive("cuboid height", self.size.z)?;
        Ok(Solid::from_node(Node::Primitive(Primitive::Cuboid {
            size: self.size,
        })))
    }
}
