use crate::math::{Point3, TOLERANCE};
use crate::solid::{BooleanOp, Dimension, Node, Solid};

/// Classification of a point relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
}

/// Classifies a point as inside or outside a solid.
///
/// Walks the construction tree: placements map the point into the child's
/// frame, extrusions clamp Z and project onto the profile, and boolean nodes
/// combine the classifications of their operands. Boundary points count as
/// inside. Planar regions only contain points with `z = 0`.
#[must_use]
pub fn classify_point_in_solid(point: &Point3, solid: &Solid) -> PointClassification {
    if solid.dimension() == Dimension::Two && point.z.abs() > TOLERANCE {
        return PointClassification::Outside;
    }
    if contains(point, solid) {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    }
}

fn contains(point: &Point3, solid: &Solid) -> bool {
    match solid.node() {
        Node::Primitive(p) => p.contains(point),
        Node::Transform { inverse, child, .. } => contains(&inverse.transform_point(point), child),
        Node::Extrude { height, profile } => {
            (-TOLERANCE..=height + TOLERANCE).contains(&point.z)
                && contains(&Point3::new(point.x, point.y, 0.0), profile)
        }
        Node::Boolean { op, operands } => match op {
            BooleanOp::Union => operands.iter().any(|s| contains(point, s)),
            BooleanOp::Intersect => operands.iter().all(|s| contains(point, s)),
            BooleanOp::Subtract => {
                let mut it = operands.iter();
                it.next().is_some_and(|first| contains(point, first))
                    && !it.any(|s| contains(point, s))
            }
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Vector2, Vector3};
    use crate::operations::creation::{MakeCircle, MakeRectangle};

    #[test]
    fn washer_profile() {
        let outer = MakeCircle::new(2.0, 32).execute().unwrap();
        let inner = MakeCircle::new(1.0, 32).execute().unwrap();
        let washer = outer.subtract(&inner).unwrap().extrude(1.0).unwrap();

        let inside = Point3::new(1.5, 0.0, 0.5);
        let hole = Point3::new(0.0, 0.0, 0.5);
        let above = Point3::new(1.5, 0.0, 1.5);
        assert_eq!(classify_point_in_solid(&inside, &washer), PointClassification::Inside);
        assert_eq!(classify_point_in_solid(&hole, &washer), PointClassification::Outside);
        assert_eq!(classify_point_in_solid(&above, &washer), PointClassification::Outside);
    }

    #[test]
    fn planar_region_has_no_thickness() {
        let r = MakeRectangle::new(Vector2::new(2.0, 2.0))
            .execute()
            .unwrap()
            .translate(Vector3::new(5.0, 0.0, 0.0))
            .unwrap();
        assert!(r.contains(&Point3::new(5.5, 0.5, 0.0)));
        assert!(!r.contains(&Point3::new(5.5, 0.5, 0.1)));
    }
}
