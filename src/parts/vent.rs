use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::math::{Point2, Vector3, TOLERANCE};
use crate::operations::boolean::Union;
use crate::operations::creation::MakeCircle;
use crate::solid::Solid;

/// Parameters of a vent hole field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentSpec {
    /// Holes in the centre column.
    pub count: u32,
    /// Column budget; one mirrored pair is added per two rows.
    pub rows: u32,
    pub radius: f64,
    pub gap: f64,
    pub segments: u32,
}

impl VentSpec {
    /// The tray's vent field.
    #[must_use]
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let case = config.case();
        Self {
            count: case.vent_count,
            rows: case.vent_rows,
            radius: case.vent_hole_radius,
            gap: case.vent_gap,
            segments: config.segments(),
        }
    }

    /// Half width and half length of the generated field, hole radius
    /// included. Computed without laying out any holes.
    #[must_use]
    pub fn half_extent(&self) -> (f64, f64) {
        if self.count == 0 || self.rows == 0 {
            return (0.0, 0.0);
        }
        let pitch = self.radius * 2.0 + self.gap;
        let pairs = self.rows.div_ceil(2).min(self.count);
        (
            f64::from(pairs - 1) * pitch + self.radius,
            f64::from(self.count - 1) * pitch / 2.0 + self.radius,
        )
    }
}

/// One column of vent holes.
#[derive(Debug, Clone, PartialEq)]
pub struct VentColumn {
    pub x: f64,
    /// Hole centres, bottom to top, centred on `y = 0`.
    pub holes: Vec<Point2>,
}

/// A diamond-shaped field of round holes, symmetric about both axes.
///
/// Columns come in mirrored pairs at `+x` and `-x`; the first pair sits on
/// `x = 0`. Each pair holds one hole fewer than the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct VentPattern {
    radius: f64,
    segments: u32,
    columns: Vec<VentColumn>,
}

impl VentPattern {
    /// Lays out the field.
    #[must_use]
    pub fn generate(spec: &VentSpec) -> Self {
        let pitch = spec.radius * 2.0 + spec.gap;
        let mut columns = Vec::new();
        let mut count = spec.count;
        let mut x = 0.0;

        if count > 0 {
            for _ in (0..spec.rows).step_by(2) {
                let holes = column(count, x, pitch);
                let mirrored = holes.iter().map(|p| Point2::new(-p.x, p.y)).collect();
                columns.push(VentColumn { x, holes });
                columns.push(VentColumn {
                    x: -x,
                    holes: mirrored,
                });
                count -= 1;
                if count == 0 {
                    break;
                }
                x += pitch;
            }
        }

        Self {
            radius: spec.radius,
            segments: spec.segments,
            columns,
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[VentColumn] {
        &self.columns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of holes in each column, in generation order.
    #[must_use]
    pub fn hole_counts(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.holes.len()).collect()
    }

    /// The field as one 2-D region, or `None` if it has no holes.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole radius is not positive.
    pub fn profile(&self) -> Result<Option<Solid>> {
        let circle = MakeCircle::new(self.radius, self.segments).execute()?;
        let mut holes = Vec::new();
        for pair in self.columns.chunks(2) {
            // the first pair shares the centre line
            let distinct = if pair[0].x.abs() < TOLERANCE { &pair[..1] } else { pair };
            for column in distinct {
                for p in &column.holes {
                    holes.push(circle.translate(Vector3::new(p.x, p.y, 0.0))?);
                }
            }
        }
        match holes.len() {
            0 => Ok(None),
            1 => Ok(holes.pop()),
            _ => Union::from_solids(holes).execute().map(Some),
        }
    }

    /// The field extruded along +Z, or `None` if it has no holes.
    ///
    /// # Errors
    ///
    /// Returns an error if the height or hole radius is not positive.
    pub fn extrude(&self, height: f64) -> Result<Option<Solid>> {
        self.profile()?.map(|p| p.extrude(height)).transpose()
    }
}

fn column(count: u32, x: f64, pitch: f64) -> Vec<Point2> {
    let span = f64::from(count - 1) * pitch;
    (0..count)
        .map(|i| Point2::new(x, f64::from(i) * pitch - span / 2.0))
        .collect()
}
