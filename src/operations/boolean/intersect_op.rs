use crate::error::Result;
use crate::solid::{BooleanOp, Solid};

use super::engine::boolean_execute;

/// Computes the boolean intersection of two solids.
pub struct Intersect {
    solid_a: Solid,
    solid_b: Solid,
}

impl Intersect {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(solid_a: &Solid, solid_b: &Solid) -> Self {
        Self {
            solid_a: solid_a.clone(),
            solid_b: solid_b.clone(),
        }
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions of the operands differ.
    pub fn execute(self) -> Result<Solid> {
        boolean_execute(BooleanOp::Intersect, vec![self.solid_a, self.solid_b])
    }
}
