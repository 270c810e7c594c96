use crate::error::Result;
use crate::solid::{Node, Primitive, Solid};

use super::{require_positive, require_segments};

/// Creates a sphere centered on the origin.
pub struct MakeSphere {
    radius: f64,
    segments: u32,
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation.
    #[must_use]
    pub fn new(radius: f64, segments: u32) -> Self {
        Self { radius, segments }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("sphere radius", self.radius)?;
        require_segments(self.segments)?;
        Ok(Solid::from_node(Node::Primitive(Primitive::Sphere {
            radius: self.radius,
            segments: self.segments,
        })))
    }
}
