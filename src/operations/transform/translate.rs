use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::solid::Solid;

use super::GeneralTransform;

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: Solid,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: &Solid, displacement: Vector3) -> Self {
        Self {
            solid: solid.clone(),
            displacement,
        }
    }

    /// Executes the translation, returning the moved solid.
    ///
    /// # Errors
    ///
    /// Returns an error if a 2-D region is displaced along Z.
    pub fn execute(self) -> Result<Solid> {
        let matrix = Matrix4::new_translation(&self.displacement);
        GeneralTransform::new(&self.solid, matrix).execute()
    }
}
