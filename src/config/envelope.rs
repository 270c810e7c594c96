use crate::error::Result;
use crate::math::{Point2, Point3, Vector2, Vector3};
use crate::operations::creation::MakeRoundedRectangle;
use crate::solid::Solid;

use super::{BoardSpec, CaseSpec};

/// A rounded-rectangle footprint centered on `x = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub half_width: f64,
    pub half_length: f64,
    pub corner_radius: f64,
    pub center_y: f64,
}

impl Outline {
    /// Full width and length.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.half_width * 2.0, self.half_length * 2.0)
    }

    /// The same outline pushed outwards by `distance` on every side.
    #[must_use]
    pub fn grow(&self, distance: f64) -> Self {
        Self {
            half_width: self.half_width + distance,
            half_length: self.half_length + distance,
            corner_radius: self.corner_radius + distance,
            center_y: self.center_y,
        }
    }

    /// The outline as a placed 2-D region.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline is degenerate.
    pub fn profile(&self, segments: u32) -> Result<Solid> {
        MakeRoundedRectangle::new(self.size(), self.corner_radius, segments)
            .execute()?
            .translate(Vector3::new(0.0, self.center_y, 0.0))
    }
}

/// Layout of the cover's rim ventilation slit.
///
/// The support shelf is cut into four bands along each long side; the
/// three gaps between them are the bridges that keep the lid attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimVentLayout {
    /// Height of the slit.
    pub gap: f64,
    /// Depth of the support shelf, also added to the cover height.
    pub support: f64,
    pub bridge_width: f64,
    /// Half length of each of the four bands removed from the shelf.
    pub band_half_length: f64,
    /// Band centres along Y.
    pub band_centers: [f64; 4],
    /// Centre of the strips removed from the shelf at the short ends, as
    /// `|x|`; each strip is one USB port wide.
    pub strip_center_x: f64,
    pub strip_half_width: f64,
    /// Bottom of the support shelf.
    pub support_z: f64,
    /// Bottom of the slit.
    pub slit_z: f64,
}

impl RimVentLayout {
    fn derive(
        board: &BoardSpec,
        case: &CaseSpec,
        inner: &Outline,
        gap: f64,
        support: f64,
        top_z: f64,
    ) -> Self {
        let straight = inner.half_length - inner.corner_radius;
        let band_half_length = (straight - case.rim_bridge_width * 3.0 / 2.0) / 4.0;
        let first = -straight + band_half_length;
        let step = case.rim_bridge_width + band_half_length * 2.0;
        let strip_half_width = board.usb_width / 2.0;
        Self {
            gap,
            support,
            bridge_width: case.rim_bridge_width,
            band_half_length,
            band_centers: [first, first + step, first + step * 2.0, first + step * 3.0],
            strip_center_x: inner.half_width - inner.corner_radius - strip_half_width,
            strip_half_width,
            support_z: top_z - gap - support,
            slit_z: top_z - gap,
        }
    }
}

/// Dimensions shared by every generator, derived once from the board and
/// case parameters.
///
/// The origin sits at the centre of the tray footprint on the floor plane.
/// The board is shifted towards `-Y` by half its USB overhang so the
/// overhanging jacks stay inside the footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEnvelope {
    /// Y offset of the board centre.
    pub board_offset_y: f64,
    /// Height of the board's bottom face; every port is anchored to it.
    pub board_z: f64,
    /// Height of the board's top face.
    pub board_top_z: f64,

    pub base_outer: Outline,
    pub base_cavity: Outline,
    pub base_height: f64,

    pub cover_outer: Outline,
    pub cover_inner: Outline,
    pub cover_height: f64,
    /// Height of the cover cavity, under the top plate.
    pub cover_cavity_height: f64,

    /// Mounting-hole centres in case coordinates.
    pub mount_holes: [Point2; 4],
    /// Y of the two snap-clip rows.
    pub clip_rows: [f64; 2],
    /// `|x|` of the snap clips: the tray's outer wall.
    pub clip_x: f64,
    pub clip_z: f64,

    pub rim_vent: Option<RimVentLayout>,
}

impl BoardEnvelope {
    /// Derives the envelope. Performs no validation.
    #[must_use]
    pub fn derive(board: &BoardSpec, case: &CaseSpec, rim_gap: f64, rim_support: f64) -> Self {
        let bw = board.half_width();
        let bl = board.half_length();
        let overhang = board.usb_overhang / 2.0;
        let board_offset_y = -overhang;
        let board_z = case.base_floor + case.base_height;

        let base_outer = Outline {
            half_width: bw + case.base_clearance,
            half_length: bl + overhang + case.base_clearance,
            corner_radius: board.corner_radius + case.base_clearance,
            center_y: 0.0,
        };
        let base_cavity = Outline {
            half_width: bw - case.base_wall + case.base_clearance,
            half_length: bl - case.base_wall + case.base_clearance,
            corner_radius: board.corner_radius - case.base_wall + case.base_clearance,
            center_y: board_offset_y,
        };

        let cover_inner = base_outer.grow(case.cover_clearance);
        let cover_outer = cover_inner.grow(case.cover_wall);
        let cover_cavity_height = case.cover_height + rim_gap + rim_support;
        let cover_height = case.cover_top + cover_cavity_height;

        let x0 = -bw + board.mount_inset_x;
        let y0 = -bl + board.mount_inset_y + board_offset_y;
        let (px, py) = (board.mount_pitch_x, board.mount_pitch_y);
        let mount_holes = [
            Point2::new(x0, y0),
            Point2::new(x0, y0 + py),
            Point2::new(x0 + px, y0 + py),
            Point2::new(x0 + px, y0),
        ];

        let power_top = -bl + board.power_offset + board.power_width / 2.0;
        let hdmi_bottom = -bl + board.hdmi_offset - board.hdmi_width / 2.0;
        let clip_rows = [y0 + py, (power_top + hdmi_bottom) / 2.0 + board_offset_y];

        let rim_vent = (rim_gap > 0.0).then(|| {
            RimVentLayout::derive(
                board,
                case,
                &cover_inner,
                rim_gap,
                rim_support,
                cover_cavity_height,
            )
        });

        Self {
            board_offset_y,
            board_z,
            board_top_z: board_z + board.thickness,
            base_outer,
            base_cavity,
            base_height: board_z,
            cover_outer,
            cover_inner,
            cover_height,
            cover_cavity_height,
            mount_holes,
            clip_rows,
            clip_x: base_outer.half_width,
            clip_z: case.clip_radius + case.clip_offset,
            rim_vent,
        }
    }

    /// Board-frame Y (measured from the back end) to case Y.
    #[must_use]
    pub fn port_y(&self, board: &BoardSpec, offset: f64) -> f64 {
        -board.half_length() + offset + self.board_offset_y
    }

    /// The four snap-clip centres, left side first. Base and cover both
    /// place their halves of the clip here.
    #[must_use]
    pub fn clip_positions(&self) -> [Point3; 4] {
        let [a, b] = self.clip_rows;
        [
            Point3::new(-self.clip_x, a, self.clip_z),
            Point3::new(-self.clip_x, b, self.clip_z),
            Point3::new(self.clip_x, b, self.clip_z),
            Point3::new(self.clip_x, a, self.clip_z),
        ]
    }
}
