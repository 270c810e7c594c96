use crate::error::Result;
use crate::solid::{Node, Primitive, Solid};

use super::{require_positive, require_segments};

/// Creates a Z-axis cylinder centered on the origin.
pub struct MakeCylinder {
    radius: f64,
    height: f64,
    segments: u32,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(radius: f64, height: f64, segments: u32) -> Self {
        Self {
            radius,
            height,
            segments,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not positive.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("cylinder radius", self.radius)?;
        require_positive("cylinder height", self.height)?;
        require_segments(self.segments)?;
        Ok(Solid::from_node(Node::Primitive(Primitive::Cylinder {
            radius: self.radius,
            height: self.height,
            segments: self.segments,
        })))
    }
}
