use std::f64::consts::FRAC_PI_2;

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::math::{Vector2, Vector3};
use crate::operations::boolean::Union;
use crate::operations::creation::{
    MakeCircle, MakeCylinder, MakeRectangle, MakeRoundedCylinder, MakeSphere,
};
use crate::pipeline::Pipeline;
use crate::solid::{Color, Solid};

use super::vent::{VentPattern, VentSpec};

/// Extra width and height around a snap-clip socket left for its post.
const CLIP_POST_MARGIN: f64 = 1.0;
/// Rounding of the socket rim, as a fraction of the clip radius.
const CLIP_ROUNDING: f64 = 0.95;
/// How far the audio ledge stops below the jack centre.
const AUDIO_LEDGE_DROP: f64 = 1.0;

/// The tray the board is screwed into.
#[must_use]
pub fn pipeline() -> Pipeline {
    Pipeline::new("base", outer_shell)
        .stage("cavity", cavity)
        .stage("ventilation", ventilation)
        .stage("storage_slot", storage_slot)
        .stage("standoffs", standoffs)
        .stage("port_ledges", port_ledges)
        .stage("snap_clips", snap_clips)
        .stage("colorize", |_, solid| Ok(solid.colorize(Color::INDIAN_RED)))
}

/// Builds the tray.
///
/// # Errors
///
/// Returns an error if a primitive is degenerate.
pub fn generate(config: &ResolvedConfig) -> Result<Solid> {
    pipeline().run(config)
}

/// The solid tray block before anything is cut from it. The cover's cavity
/// is this outline grown by the cover clearance.
///
/// # Errors
///
/// Returns an error if the outline is degenerate.
pub fn outer_shell(config: &ResolvedConfig) -> Result<Solid> {
    let e = config.envelope();
    e.base_outer.profile(config.segments())?.extrude(e.base_height)
}

fn cavity(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let e = config.envelope();
    let pocket = e
        .base_cavity
        .profile(config.segments())?
        .extrude(e.base_height)?
        .translate(Vector3::new(0.0, 0.0, config.case().base_floor))?;
    shell.subtract(&pocket)
}

fn ventilation(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let pattern = VentPattern::generate(&VentSpec::from_config(config));
    match pattern.extrude(config.case().base_floor)? {
        Some(field) => {
            let field = field.translate(Vector3::new(0.0, config.envelope().board_offset_y, 0.0))?;
            shell.subtract(&field)
        }
        None => Ok(shell),
    }
}

/// Notch in the back wall for the storage card, running from the back
/// end to the middle of the tray.
fn storage_slot(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let board = config.board();
    let e = config.envelope();
    let reach = e.base_outer.half_length;
    let slot = MakeRectangle::new(Vector2::new(board.sd_slot_width, reach * 2.0))
        .execute()?
        .translate(Vector3::new(0.0, -reach, 0.0))?
        .extrude(board.sd_slot_depth)?
        .translate(Vector3::new(0.0, 0.0, e.base_height - board.sd_slot_depth))?;
    shell.subtract(&slot)
}

/// Spacer bosses under the mounting holes, each capped with a dome that
/// locates the board.
fn standoffs(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let board = config.board();
    let e = config.envelope();
    let segments = config.segments();
    let boss = MakeCircle::new(board.mount_boss_radius, segments)
        .execute()?
        .extrude(e.base_height)?;
    let dome = MakeSphere::new(board.mount_hole_radius, segments)
        .execute()?
        .translate(Vector3::new(0.0, 0.0, e.base_height))?;
    let standoff = boss.union(&dome)?;

    let mut solids = vec![shell];
    for hole in &e.mount_holes {
        solids.push(standoff.translate(Vector3::new(hole.x, hole.y, 0.0))?);
    }
    Union::from_solids(solids).execute()
}

/// A block supporting one connector from below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ledge {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub half_width: f64,
    pub half_depth: f64,
    pub height: f64,
    /// Radius and centre height of the cradle cut along X, for ledges that
    /// rise past the board.
    pub cradle: Option<(f64, f64)>,
}

impl Ledge {
    fn solid(&self, segments: u32) -> Result<Solid> {
        let mut block =
            MakeRectangle::new(Vector2::new(self.half_width * 2.0, self.half_depth * 2.0))
                .execute()?
                .extrude(self.height)?;
        if let Some((radius, z)) = self.cradle {
            let cradle = MakeCylinder::new(radius, self.half_width * 2.0, segments)
                .execute()?
                .rotate(Vector3::new(0.0, FRAC_PI_2, 0.0))?
                .translate(Vector3::new(0.0, 0.0, z))?;
            block = block.subtract(&cradle)?;
        }
        block.translate(Vector3::new(self.x, self.y, 0.0))
    }
}

/// Connector ledges: one under the middle of the USB stack and one under
/// each side connector, reaching into the cover wall.
#[must_use]
pub fn ledges(config: &ResolvedConfig) -> [Ledge; 4] {
    let board = config.board();
    let case = config.case();
    let e = config.envelope();
    let cf = case.cover_clearance;
    let block = board.usb_support_block / 2.0;

    let side_half_width = (case.cover_wall + cf) / 2.0;
    let side_x = e.base_outer.half_width + side_half_width;
    let side = |name, offset: f64, size: f64| Ledge {
        name,
        x: side_x,
        y: e.port_y(board, offset),
        half_width: side_half_width,
        half_depth: size / 2.0 + cf,
        height: e.board_top_z,
        cradle: None,
    };

    let audio_z = e.board_top_z + board.audio_diameter / 2.0;
    let audio_radius = board.audio_diameter / 2.0 + cf;
    let audio = Ledge {
        height: audio_z - AUDIO_LEDGE_DROP,
        cradle: Some((audio_radius, audio_z)),
        ..side("audio", board.audio_offset, board.audio_diameter)
    };

    [
        Ledge {
            name: "usb",
            x: 0.0,
            y: board.half_length() - block + e.board_offset_y,
            half_width: block,
            half_depth: block,
            height: e.base_height,
            cradle: None,
        },
        audio,
        side("hdmi", board.hdmi_offset, board.hdmi_width),
        side("power", board.power_offset, board.power_width),
    ]
}

fn port_ledges(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let mut solids = vec![shell];
    for ledge in ledges(config) {
        solids.push(ledge.solid(config.segments())?);
    }
    Union::from_solids(solids).execute()
}

/// Tray half of each snap clip: a post inside the wall with a rounded
/// socket for the cover's ball.
fn snap_clips(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let e = config.envelope();
    let radius = config.case().clip_radius;
    let post_half_width = (radius / 2.0 + CLIP_POST_MARGIN) / 2.0;
    let post = MakeRectangle::new(Vector2::new(
        post_half_width * 2.0,
        (radius + CLIP_POST_MARGIN) * 2.0,
    ))
    .execute()?
    .extrude(e.clip_z + radius + CLIP_POST_MARGIN)?;
    let socket = MakeRoundedCylinder::new(
        radius,
        e.clip_z * 2.0,
        radius * CLIP_ROUNDING,
        config.segments(),
    )
    .execute()?;

    e.clip_positions().iter().try_fold(shell, |acc, clip| {
        let inward = -clip.x.signum() * post_half_width;
        acc.union(&post.translate(Vector3::new(clip.x + inward, clip.y, 0.0))?)?
            .subtract(&socket.translate(Vector3::new(clip.x, clip.y, 0.0))?)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::config::{BoardSpec, CaseSpec, ConfigurationResolver};
    use crate::math::Point3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn default_config() -> ResolvedConfig {
        ConfigurationResolver::default().resolve().unwrap()
    }

    #[test]
    fn stages_in_order() {
        let names: Vec<_> = pipeline().stage_names().collect();
        assert_eq!(
            names,
            [
                "cavity",
                "ventilation",
                "storage_slot",
                "standoffs",
                "port_ledges",
                "snap_clips",
                "colorize"
            ]
        );
    }

    #[test]
    fn tray_bounds() {
        let base = generate(&default_config()).unwrap();
        let b = base.bounding_box().unwrap();
        assert_abs_diff_eq!(b.min.x, -28.25);
        // side ledges reach through the cover wall
        assert_abs_diff_eq!(b.max.x, 30.5);
        assert_abs_diff_eq!(b.min.y, -43.75);
        assert_abs_diff_eq!(b.max.y, 43.75);
        assert_abs_diff_eq!(b.min.z, 0.0);
        // audio ledge, one millimetre below the jack centre
        assert_abs_diff_eq!(b.max.z, 7.85, epsilon = 1e-9);
        assert_eq!(base.color(), Some(Color::INDIAN_RED));
    }

    #[test]
    fn floor_wall_and_cavity() {
        let base = generate(&default_config()).unwrap();
        // wall
        assert!(base.contains(&p(-27.75, 0.0, 3.0)));
        // cavity above the floor
        assert!(!base.contains(&p(-10.0, 5.0, 3.0)));
        // floor between vent holes
        assert!(base.contains(&p(3.0, -1.0, 0.75)));
    }

    #[test]
    fn vents_pierce_the_floor() {
        let config = default_config();
        let base = generate(&config).unwrap();
        let offset = config.envelope().board_offset_y;
        assert!(!base.contains(&p(0.0, offset, 0.75)));
        assert!(!base.contains(&p(12.0, offset + 12.0, 0.75)));
        assert!(!base.contains(&p(-12.0, offset - 12.0, 0.75)));
    }

    #[test]
    fn no_vents_leaves_a_solid_floor() {
        let case = CaseSpec {
            vent_count: 0,
            ..CaseSpec::default()
        };
        let config = ConfigurationResolver::new(BoardSpec::default(), case).resolve().unwrap();
        let base = generate(&config).unwrap();
        let offset = config.envelope().board_offset_y;
        assert!(base.contains(&p(0.0, offset, 0.75)));
    }

    #[test]
    fn storage_slot_notches_the_back_wall() {
        let base = generate(&default_config()).unwrap();
        assert!(!base.contains(&p(0.0, -43.0, 3.5)));
        assert!(base.contains(&p(0.0, -43.0, 2.0)));
        assert!(base.contains(&p(10.0, -43.0, 3.5)));
    }

    #[test]
    fn standoffs_carry_domes() {
        let config = default_config();
        let base = generate(&config).unwrap();
        for hole in &config.envelope().mount_holes {
            assert!(base.contains(&p(hole.x + 2.5, hole.y, 4.0)));
            assert!(base.contains(&p(hole.x, hole.y, 5.5)));
            assert!(!base.contains(&p(hole.x + 2.5, hole.y, 5.0)));
        }
    }

    #[test]
    fn audio_ledge_is_cradled() {
        let config = default_config();
        let audio = ledges(&config)[1];
        assert_eq!(audio.name, "audio");
        let (radius, z) = audio.cradle.unwrap();
        assert_abs_diff_eq!(z, 8.85, epsilon = 1e-9);
        assert_abs_diff_eq!(radius, 3.25);
        assert_abs_diff_eq!(audio.height, 7.85, epsilon = 1e-9);

        let base = generate(&config).unwrap();
        // cradle floor
        assert!(!base.contains(&p(audio.x, audio.y, 7.0)));
        // cradle cheeks
        assert!(base.contains(&p(audio.x, audio.y + 3.2, 7.0)));
        assert!(base.contains(&p(audio.x, audio.y, 5.0)));
    }

    #[test]
    fn side_ledges_stop_at_the_board() {
        let config = default_config();
        for ledge in &ledges(&config)[2..] {
            assert!(ledge.cradle.is_none());
            assert_abs_diff_eq!(ledge.height, config.envelope().board_top_z);
            assert_abs_diff_eq!(
                ledge.x + ledge.half_width,
                config.envelope().cover_outer.half_width
            );
        }
    }

    #[test]
    fn clip_sockets_under_posts() {
        let config = default_config();
        let base = generate(&config).unwrap();
        for clip in config.envelope().clip_positions() {
            let inside = clip.x - clip.x.signum() * 0.5;
            assert!(!base.contains(&p(inside, clip.y, 1.0)));
            assert!(base.contains(&p(inside, clip.y, 3.5)));
        }
    }
}
