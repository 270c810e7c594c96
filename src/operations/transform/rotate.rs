use crate::error::Result;
use crate::math::Vector3;
use crate::solid::Solid;

use super::GeneralTransform;

/// Rotates a solid about the origin.
pub struct Rotate {
    solid: Solid,
    angles: Vector3,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angles` - Euler angles in radians about X, Y and Z, applied in
    ///   that order.
    #[must_use]
    pub fn new(solid: &Solid, angles: Vector3) -> Self {
        Self {
            solid: solid.clone(),
            angles,
        }
    }

    /// Executes the rotation, returning the rotated solid.
    ///
    /// # Errors
    ///
    /// Returns an error if a 2-D region is tilted out of the XY plane.
    pub fn execute(self) -> Result<Solid> {
        let rotation =
            nalgebra::Rotation3::from_euler_angles(self.angles.x, self.angles.y, self.angles.z);
        GeneralTransform::new(&self.solid, rotation.to_homogeneous()).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::math::{Point3, Vector2};
    use crate::operations::creation::{MakeCylinder, MakeRectangle};

    #[test]
    fn quarter_turn_about_x_lays_cylinder_along_y() {
        let c = MakeCylinder::new(1.0, 10.0, 16).execute().unwrap();
        let r = Rotate::new(&c, Vector3::new(FRAC_PI_2, 0.0, 0.0))
            .execute()
            .unwrap();
        assert!(r.contains(&Point3::new(0.0, 4.5, 0.0)));
        assert!(!r.contains(&Point3::new(0.0, 0.0, 4.5)));

        let aabb = r.bounding_box().unwrap();
        assert!((aabb.max.y - 5.0).abs() < 1e-9);
        assert!((aabb.max.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_turn_about_y_lays_cylinder_along_x() {
        let c = MakeCylinder::new(1.0, 10.0, 16).execute().unwrap();
        let r = Rotate::new(&c, Vector3::new(0.0, FRAC_PI_2, 0.0))
            .execute()
            .unwrap();
        assert!(r.contains(&Point3::new(4.5, 0.0, 0.0)));
        assert!(!r.contains(&Point3::new(0.0, 0.0, 4.5)));
    }

    #[test]
    fn planar_region_may_only_spin_about_z() {
        let rect = MakeRectangle::new(Vector2::new(4.0, 1.0)).execute().unwrap();
        let spun = Rotate::new(&rect, Vector3::new(0.0, 0.0, FRAC_PI_2))
            .execute()
            .unwrap();
        assert!(spun.contains(&Point3::new(0.0, 1.5, 0.0)));
        assert!(Rotate::new(&rect, Vector3::new(FRAC_PI_2, 0.0, 0.0))
            .execute()
            .is_err());
    }
}
