use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;
use crate::solid::{Node, Primitive, Solid};

use super::{require_positive, require_segments};

/// Creates a Z-axis cylinder with rounded rims, centered on the origin.
pub struct MakeRoundedCylinder {
    radius: f64,
    height: f64,
    round_radius: f64,
    segments: u32,
}

impl MakeRoundedCylinder {
    /// Creates a new `MakeRoundedCylinder` operation.
    #[must_use]
    pub fn new(radius: f64, height: f64, round_radius: f64, segments: u32) -> Self {
        Self {
            radius,
            height,
            round_radius,
            segments,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not positive, or the
    /// round radius exceeds the radius or half the height.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("cylinder radius", self.radius)?;
        require_positive("cylinder height", self.height)?;
        require_segments(self.segments)?;
        let limit = self.radius.min(self.height / 2.0);
        if !(0.0..=limit + TOLERANCE).contains(&self.round_radius) {
            return Err(GeometryError::InvalidInput(format!(
                "round radius {} must lie in [0, {limit}]",
                self.round_radius
            ))
            .into());
        }
        Ok(Solid::from_node(Node::Primitive(Primitive::RoundedCylinder {
            radius: self.radius,
            height: self.height,
            round_radius: self.round_radius,
            segments: self.segments,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_radius_larger_than_radius_fails() {
        assert!(MakeRoundedCylinder::new(1.0, 10.0, 1.5, 16).execute().is_err());
    }

    #[test]
    fn round_radius_larger_than_half_height_fails() {
        assert!(MakeRoundedCylinder::new(5.0, 2.0, 1.5, 16).execute().is_err());
    }
}
