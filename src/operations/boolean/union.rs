use crate::error::Result;
use crate::solid::{BooleanOp, Solid};

use super::engine::boolean_execute;

/// Computes the boolean union of solids.
pub struct Union {
    solids: Vec<Solid>,
}

impl Union {
    /// Creates a new `Union` operation of two solids.
    #[must_use]
    pub fn new(solid_a: &Solid, solid_b: &Solid) -> Self {
        Self {
            solids: vec![solid_a.clone(), solid_b.clone()],
        }
    }

    /// Creates a new `Union` operation over any number of solids.
    #[must_use]
    pub fn from_solids(solids: Vec<Solid>) -> Self {
        Self { solids }
    }

    /// Executes the union.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two solids are given or their
    /// dimensions differ.
    pub fn execute(self) -> Result<Solid> {
        boolean_execute(BooleanOp::Union, self.solids)
    }
}
