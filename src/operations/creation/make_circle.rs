use crate::error::Result;
use crate::solid::{Node, Primitive, Solid};

use super::{require_positive, require_segments};

/// Creates a disc centered on the origin of the XY plane.
pub struct MakeCircle {
    radius: f64,
    segments: u32,
}

impl MakeCircle {
    /// Creates a new `MakeCircle` operation.
    #[must_use]
    pub fn new(radius: f64, segments: u32) -> Self {
        Self { radius, segments }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or fewer than three
    /// segments are requested.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("circle radius", self.radius)?;
        require_segments(self.segments)?;
        Ok(Solid::from_node(Node::Primitive(Primitive::Circle {
            radius: self.radius,
            segments: self.segments,
        })))
    }
}
