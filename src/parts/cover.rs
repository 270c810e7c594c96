use std::f64::consts::FRAC_PI_2;

use crate::config::{Outline, ResolvedConfig};
use crate::error::Result;
use crate::math::{Vector2, Vector3};
use crate::operations::boolean::Union;
use crate::operations::creation::{MakeCuboid, MakeCylinder, MakeRectangle, MakeSphere};
use crate::pipeline::Pipeline;
use crate::solid::{Color, Solid};

/// How far the rim slit cutter reaches past the outer wall.
const SLIT_OVERCUT: f64 = 0.5;

/// The shell that slides over the tray.
#[must_use]
pub fn pipeline() -> Pipeline {
    Pipeline::new("cover", outer_shell)
        .stage("cavity", cavity)
        .stage("usb_lip", usb_lip)
        .stage("rim_vent", rim_vent)
        .stage("storage_slot", storage_slot)
        .stage("led_holes", led_holes)
        .stage("audio_slot", audio_slot)
        .stage("hdmi_slot", hdmi_slot)
        .stage("power_slot", power_slot)
        .stage("network_window", network_window)
        .stage("usb_windows", usb_windows)
        .stage("clips_and_hold_downs", clips_and_hold_downs)
        .stage("colorize", |_, solid| Ok(solid.colorize(Color::FOREST_GREEN)))
}

/// Builds the cover.
///
/// # Errors
///
/// Returns an error if a primitive is degenerate.
pub fn generate(config: &ResolvedConfig) -> Result<Solid> {
    pipeline().run(config)
}

fn outer_shell(config: &ResolvedConfig) -> Result<Solid> {
    let e = config.envelope();
    e.cover_outer.profile(config.segments())?.extrude(e.cover_height)
}

/// The space under the top plate, open at the bottom.
///
/// # Errors
///
/// Returns an error if the outline is degenerate.
pub fn cavity_envelope(config: &ResolvedConfig) -> Result<Solid> {
    let e = config.envelope();
    e.cover_inner.profile(config.segments())?.extrude(e.cover_cavity_height)
}

fn cavity(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    shell.subtract(&cavity_envelope(config)?)
}

/// Thin shelf along the front end that sits under the USB jacks.
fn usb_lip(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    if !config.case().features.usb_lip {
        return Ok(shell);
    }
    let board = config.board();
    let e = config.envelope();
    let depth = board.usb_overhang;
    let lip = MakeRectangle::new(Vector2::new(e.cover_outer.half_width * 2.0, depth))
        .execute()?
        .extrude(board.thickness)?
        .translate(Vector3::new(
            0.0,
            e.cover_inner.half_length - depth / 2.0,
            e.board_z + config.case().cover_clearance,
        ))?
        .intersect(&cavity_envelope(config)?)?;
    shell.union(&lip)
}

/// Slit around the rim under the top plate, with a slotted shelf carrying
/// the lid across it.
fn rim_vent(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let e = config.envelope();
    let Some(rim) = e.rim_vent else {
        return Ok(shell);
    };
    let segments = config.segments();

    let shelf_opening = Outline {
        half_width: e.cover_inner.half_width - rim.support,
        half_length: e.cover_inner.half_length - rim.support,
        ..e.cover_inner
    };
    let mut ring = e
        .cover_outer
        .profile(segments)?
        .subtract(&shelf_opening.profile(segments)?)?;

    let strip = MakeRectangle::new(Vector2::new(
        rim.strip_half_width * 2.0,
        e.cover_outer.half_length * 2.0,
    ))
    .execute()?;
    for x in [-rim.strip_center_x, rim.strip_center_x] {
        ring = ring.subtract(&strip.translate(Vector3::new(x, 0.0, 0.0))?)?;
    }
    let band = MakeRectangle::new(Vector2::new(
        e.cover_outer.half_width * 2.0,
        rim.band_half_length * 2.0,
    ))
    .execute()?;
    for y in rim.band_centers {
        ring = ring.subtract(&band.translate(Vector3::new(0.0, y, 0.0))?)?;
    }
    let shelf = ring
        .extrude(rim.gap + rim.support)?
        .translate(Vector3::new(0.0, 0.0, rim.support_z))?;

    let slit = e
        .cover_outer
        .grow(SLIT_OVERCUT)
        .profile(segments)?
        .subtract(&e.cover_inner.profile(segments)?)?
        .extrude(rim.gap)?
        .translate(Vector3::new(0.0, 0.0, rim.slit_z))?;

    shell.union(&shelf)?.subtract(&slit)
}

fn storage_slot(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    if !config.case().features.dim_slot {
        return Ok(shell);
    }
    let e = config.envelope();
    let reach = e.base_outer.half_length;
    let slot = MakeRectangle::new(Vector2::new(config.board().sd_slot_width, reach * 2.0))
        .execute()?
        .translate(Vector3::new(0.0, -reach, 0.0))?
        .extrude(e.board_z + config.case().cover_clearance)?;
    shell.subtract(&slot)
}

fn led_holes(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    if !config.case().features.leds {
        return Ok(shell);
    }
    let board = config.board();
    let case = config.case();
    let e = config.envelope();
    let drill = MakeCylinder::new(case.led_hole_radius, case.cover_wall * 2.0, config.segments())
        .execute()?
        .rotate(Vector3::new(FRAC_PI_2, 0.0, 0.0))?;
    let y = -(e.cover_inner.half_length + case.cover_wall / 2.0);
    let z = e.board_top_z + board.led_height;
    let x = -board.half_width() + board.led_offset;
    [x, x + board.led_spacing].iter().try_fold(shell, |acc, x| {
        acc.subtract(&drill.translate(Vector3::new(*x, y, z))?)
    })
}

/// X of a slot cut through the long side wall from the tray's outer face.
fn side_slot_x(config: &ResolvedConfig, half_width: f64) -> f64 {
    config.envelope().base_outer.half_width + half_width
}

fn audio_slot(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let board = config.board();
    let case = config.case();
    let e = config.envelope();
    let radius = board.audio_diameter / 2.0 + case.cover_clearance * 2.0;
    let z = e.board_top_z + board.audio_diameter / 2.0;
    let width = case.cover_wall * 2.0;

    let slot = MakeRectangle::new(Vector2::new(width, radius * 2.0))
        .execute()?
        .extrude(z)?;
    let top = MakeCylinder::new(radius, width, config.segments())
        .execute()?
        .rotate(Vector3::new(0.0, FRAC_PI_2, 0.0))?
        .translate(Vector3::new(0.0, 0.0, z))?;
    let cut = slot.union(&top)?.translate(Vector3::new(
        side_slot_x(config, case.cover_wall),
        e.port_y(board, board.audio_offset),
        0.0,
    ))?;
    shell.subtract(&cut)
}

fn hdmi_slot(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let board = config.board();
    let case = config.case();
    let e = config.envelope();
    let half_depth = board.hdmi_width / 2.0 + case.cover_clearance * 2.0;
    let cut = MakeRectangle::new(Vector2::new(case.cover_wall * 2.0, half_depth * 2.0))
        .execute()?
        .extrude(e.board_top_z + board.hdmi_height + case.cover_clearance)?
        .translate(Vector3::new(
            side_slot_x(config, case.cover_wall),
            e.port_y(board, board.hdmi_offset),
            0.0,
        ))?;
    shell.subtract(&cut)
}

fn power_slot(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let board = config.board();
    let case = config.case();
    let e = config.envelope();
    let half_width = (case.cover_wall + case.cover_clearance) / 2.0;
    let half_depth = board.power_width / 2.0 + case.cover_clearance * 2.0;
    let cut = MakeRectangle::new(Vector2::new(half_width * 2.0, half_depth * 2.0))
        .execute()?
        .extrude(e.board_top_z + board.power_height + case.cover_clearance)?
        .translate(Vector3::new(
            side_slot_x(config, half_width),
            e.port_y(board, board.power_offset),
            0.0,
        ))?;
    shell.subtract(&cut)
}

/// A window through the front wall, starting just above the board.
fn back_window(config: &ResolvedConfig, center_x: f64, width: f64, height: f64) -> Result<Solid> {
    let case = config.case();
    let e = config.envelope();
    let cf = case.cover_clearance;
    let half_depth = (case.cover_wall + cf) / 2.0;
    MakeRectangle::new(Vector2::new(width - cf * 2.0, half_depth * 2.0))
        .execute()?
        .extrude(height - cf * 2.0)?
        .translate(Vector3::new(
            center_x,
            e.cover_outer.half_length - half_depth,
            e.board_top_z + cf,
        ))
}

fn network_window(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    if !config.case().features.network {
        return Ok(shell);
    }
    let board = config.board();
    let x = board.half_width() - board.network_offset;
    shell.subtract(&back_window(config, x, board.network_width, board.network_height)?)
}

/// USB bank windows, each with a fin next to it bracing the top plate.
fn usb_windows(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let board = config.board();
    let case = config.case();
    let e = config.envelope();
    let features = case.features;
    let base_z = e.board_top_z + case.cover_clearance;
    let fin = MakeRectangle::new(Vector2::new(case.usb_fin_width, board.usb_overhang * 3.0))
        .execute()?
        .extrude(e.cover_height - base_z)?;

    let banks = [
        (features.usb_bank1, board.usb_bank1_offset),
        (features.usb_bank2, board.usb_bank2_offset),
    ];
    let mut shell = shell;
    for (_, offset) in banks.into_iter().filter(|(enabled, _)| *enabled) {
        let x = board.half_width() - offset;
        shell = shell.subtract(&back_window(config, x, board.usb_width, board.usb_height)?)?;
        let fin_x = x + board.usb_width / 2.0 + case.usb_fin_gap + case.usb_fin_width / 2.0;
        let fin_y = e.cover_inner.half_length - board.usb_overhang * 1.5;
        shell = shell.union(&fin.translate(Vector3::new(fin_x, fin_y, base_z))?)?;
    }
    Ok(shell)
}

/// Cover half of each snap clip and the posts pressing the board onto its
/// bosses.
fn clips_and_hold_downs(config: &ResolvedConfig, shell: Solid) -> Result<Solid> {
    let board = config.board();
    let case = config.case();
    let e = config.envelope();

    let ball = MakeSphere::new(case.clip_radius, config.segments()).execute()?;
    let mut solids = vec![shell];
    for clip in e.clip_positions() {
        solids.push(ball.translate(clip.coords)?);
    }

    let side = board.mount_hole_radius;
    let base_z = e.board_top_z + case.cover_clearance;
    let half_height = (e.cover_height - base_z) / 2.0;
    let post = MakeCuboid::new(Vector3::new(side * 2.0, side * 2.0, half_height * 2.0)).execute()?;
    let x = e.cover_inner.half_width - side;
    for y in hold_down_rows(config) {
        for x in [-x, x] {
            solids.push(post.translate(Vector3::new(x, y, base_z + half_height))?);
        }
    }
    Union::from_solids(solids).execute()
}

/// Y of the two hold-down rows: the mounting-hole rows.
#[must_use]
pub fn hold_down_rows(config: &ResolvedConfig) -> [f64; 2] {
    let holes = config.envelope().mount_holes;
    [holes[0].y, holes[1].y]
}
