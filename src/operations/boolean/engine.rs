use crate::error::{GeometryError, Result};
use crate::solid::{BooleanOp, Node, Solid};

/// Builds a boolean node over `operands`.
///
/// All operands must share the same dimension. For
/// [`BooleanOp::Subtract`] the first operand is the minuend and every
/// further operand is removed from it.
///
/// # Errors
///
/// Returns an error if fewer than two operands are given or their
/// dimensions differ.
pub fn boolean_execute(op: BooleanOp, operands: Vec<Solid>) -> Result<Solid> {
    let Some(first) = operands.first() else {
        return Err(GeometryError::Degenerate(format!("{op:?} of no solids")).into());
    };
    if operands.len() < 2 {
        return Err(GeometryError::Degenerate(format!("{op:?} of a single solid")).into());
    }

    let dimension = first.dimension();
    if let Some(other) = operands.iter().find(|s| s.dimension() != dimension) {
        return Err(GeometryError::DimensionMismatch {
            left: dimension.rank(),
            right: other.dimension().rank(),
        }
        .into());
    }

    Ok(Solid::from_node(Node::Boolean { op, operands }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EnclosureError;
    use crate::math::{Vector2, Vector3};
    use crate::operations::creation::{MakeCuboid, MakeRectangle};

    #[test]
    fn mixed_dimensions_fail() {
        let a = MakeCuboid::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        let b = MakeRectangle::new(Vector2::new(1.0, 1.0)).execute().unwrap();
        let err = boolean_execute(BooleanOp::Union, vec![a, b]).unwrap_err();
        assert!(matches!(
            err,
            EnclosureError::Geometry(GeometryError::DimensionMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn single_operand_fails() {
        let a = MakeCuboid::new(Vector3::new(1.0, 1.0, 1.0)).execute().unwrap();
        assert!(boolean_execute(BooleanOp::Intersect, vec![a]).is_err());
        assert!(boolean_execute(BooleanOp::Union, Vec::new()).is_err());
    }
}
