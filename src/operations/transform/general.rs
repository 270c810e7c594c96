use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, TOLERANCE};
use crate::solid::{Dimension, Node, Solid};

/// Places a solid with an arbitrary affine 4x4 matrix.
pub struct GeneralTransform {
    solid: Solid,
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(solid: &Solid, matrix: Matrix4) -> Self {
        Self {
            solid: solid.clone(),
            matrix,
        }
    }

    /// Executes the transformation, returning the placed solid.
    ///
    /// Consecutive placements collapse into one matrix. The color tag of
    /// `solid` carries over to the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is singular, not affine, or would move
    /// a 2-D region out of the XY plane.
    pub fn execute(self) -> Result<Solid> {
        let m = &self.matrix;
        let projective = m[(3, 0)].abs() > TOLERANCE
            || m[(3, 1)].abs() > TOLERANCE
            || m[(3, 2)].abs() > TOLERANCE
            || (m[(3, 3)] - 1.0).abs() > TOLERANCE;
        if projective {
            return Err(GeometryError::InvalidInput("transform is not affine".into()).into());
        }
        if self.solid.dimension() == Dimension::Two && !keeps_xy_plane(m) {
            return Err(GeometryError::InvalidInput(
                "transform moves a 2-D region out of the XY plane".into(),
            )
            .into());
        }

        let (matrix, child) = match self.solid.node() {
            Node::Transform { matrix, child, .. } => (self.matrix * matrix, child.clone()),
            _ => (self.matrix, self.solid.clone()),
        };
        let inverse = matrix
            .try_inverse()
            .ok_or(GeometryError::SingularTransform)?;

        let placed = Solid::from_node(Node::Transform {
            matrix,
            inverse,
            child,
        });
        Ok(match self.solid.color() {
            Some(color) => placed.colorize(color),
            None => placed,
        })
    }
}

/// A planar region stays planar when Z neither mixes into X/Y nor shifts.
fn keeps_xy_plane(m: &Matrix4) -> bool {
    [m[(0, 2)], m[(1, 2)], m[(2, 0)], m[(2, 1)], m[(2, 3)]]
        .iter()
        .all(|v| v.abs() < TOLERANCE)
}
