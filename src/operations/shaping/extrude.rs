use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;
use crate::solid::{Dimension, Node, Solid};

/// Extrudes a 2-D region along +Z to create a solid.
pub struct Extrude {
    profile: Solid,
    height: f64,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(profile: &Solid, height: f64) -> Self {
        Self {
            profile: profile.clone(),
            height,
        }
    }

    /// Executes the extrusion. The result spans `z = 0` to `z = height`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a zero or negative height
    /// and [`GeometryError::DimensionMismatch`] if the profile is already a
    /// volume.
    pub fn execute(self) -> Result<Solid> {
        if !self.height.is_finite() || self.height < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "extrusion height must be positive, got {}",
                self.height
            ))
            .into());
        }
        if self.profile.dimension() != Dimension::Two {
            return Err(GeometryError::DimensionMismatch { left: 3, right: 2 }.into());
        }
        Ok(Solid::from_node(Node::Extrude {
            height: self.height,
            profile: self.profile,
        }))
    }
}
