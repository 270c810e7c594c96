use crate::error::Result;
use crate::math::Vector2;
use crate::solid::{Node, Primitive, Solid};

use super::require_positive;

/// Creates an axis-aligned rectangle centered on the origin.
pub struct MakeRectangle {
    size: Vector2,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(size: Vector2) -> Self {
        Self { size }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not positive.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("rectangle width", self.size.x)?;
        require_positive("rectangle length", self.size.y)?;
        Ok(Solid::from_node(Node::Primitive(Primitive::Rectangle {
            size: self.size,
        })))
    }
}
