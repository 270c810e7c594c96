use crate::error::Result;
use crate::solid::{BooleanOp, Solid};

use super::engine::boolean_execute;

/// Computes the boolean difference A - B of two solids.
pub struct Subtract {
    solid_a: Solid,
    solid_b: Solid,
}

impl Subtract {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(solid_a: &Solid, solid_b: &Solid) -> Self {
        Self {
            solid_a: solid_a.clone(),
            solid_b: solid_b.clone(),
        }
    }

    /// Executes the subtraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions of A and B differ.
    pub fn execute(self) -> Result<Solid> {
        boolean_execute(BooleanOp::Subtract, vec![self.solid_a, self.solid_b])
    }
}
