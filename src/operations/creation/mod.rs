mod make_circle;
mod make_cuboid;
mod make_cylinder;
mod make_rectangle;
mod make_rounded_cylinder;
mod make_rounded_rectangle;
mod make_sphere;

pub use make_circle::MakeCircle;
pub use make_cuboid::MakeCuboid;
pub use make_cylinder::MakeCylinder;
pub use make_rectangle::MakeRectangle;
pub use make_rounded_cylinder::MakeRoundedCylinder;
pub use make_rounded_rectangle::MakeRoundedRectangle;
pub use make_sphere::MakeSphere;

use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

/// Minimum number of segments approximating a full circle.
pub const MIN_SEGMENTS: u32 = 3;

fn require_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > TOLERANCE {
        Ok(())
    } else {
        Err(GeometryError::InvalidInput(format!("{what} must be positive, got {value}")).into())
    }
}

fn require_segments(segments: u32) -> Result<()> {
    if segments < MIN_SEGMENTS {
        return Err(GeometryError::InvalidInput(format!(
            "at least {MIN_SEGMENTS} segments are required, got {segments}"
        ))
        .into());
    }
    Ok(())
}
