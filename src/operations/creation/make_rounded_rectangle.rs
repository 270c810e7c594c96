use crate::error::{GeometryError, Result};
use crate::math::{Vector2, TOLERANCE};
use crate::solid::{Node, Primitive, Solid};

use super::{require_positive, require_segments};

/// Creates a rectangle with filleted corners, centered on the origin.
pub struct MakeRoundedRectangle {
    size: Vector2,
    round_radius: f64,
    segments: u32,
}

impl MakeRoundedRectangle {
    /// Creates a new `MakeRoundedRectangle` operation.
    #[must_use]
    pub fn new(size: Vector2, round_radius: f64, segments: u32) -> Self {
        Self {
            size,
            round_radius,
            segments,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a side is not positive, or the corner radius is
    /// negative or larger than half the shorter side.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("rectangle width", self.size.x)?;
        require_positive("rectangle length", self.size.y)?;
        require_segments(self.segments)?;
        let limit = self.size.x.min(self.size.y) / 2.0;
        if !(0.0..=limit + TOLERANCE).contains(&self.round_radius) {
            return Err(GeometryError::InvalidInput(format!(
                "round radius {} must lie in [0, {limit}]",
                self.round_radius
            ))
            .into());
        }
        Ok(Solid::from_node(Node::Primitive(Primitive::RoundedRectangle {
            size: self.size,
            round_radius: self.round_radius,
            segments: self.segments,
        })))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn corner_is_open() {
        let r = MakeRoundedRectangle::new(Vector2::new(4.0, 4.0), 1.0, 12)
            .execute()
            .unwrap();
        assert!(r.contains(&Point3::new(0.0, 1.95, 0.0)));
        assert!(!r.contains(&Point3::new(1.95, 1.95, 0.0)));
    }

    #[test]
    fn oversized_round_radius_fails() {
        let result = MakeRoundedRectangle::new(Vector2::new(4.0, 2.0), 1.5, 12).execute();
        assert!(result.is_err());
    }
}
