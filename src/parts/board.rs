use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::math::{Point2, Vector2, Vector3};
use crate::operations::creation::{MakeCircle, MakeRoundedRectangle};
use crate::pipeline::Pipeline;
use crate::solid::{Color, Solid};

/// Mock of the board itself: a drilled plate sitting on the tray bosses.
#[must_use]
pub fn pipeline() -> Pipeline {
    Pipeline::new("board", plate)
        .stage("mounting_holes", mounting_holes)
        .stage("thickness", thickness)
        .stage("colorize", |_, solid| Ok(solid.colorize(Color::GOLDENROD)))
}

/// Builds the board mock.
///
/// # Errors
///
/// Returns an error if a primitive is degenerate.
pub fn generate(config: &ResolvedConfig) -> Result<Solid> {
    pipeline().run(config)
}

/// Mounting-hole centres in case coordinates.
#[must_use]
pub fn hole_centers(config: &ResolvedConfig) -> [Point2; 4] {
    config.envelope().mount_holes
}

fn plate(config: &ResolvedConfig) -> Result<Solid> {
    let board = config.board();
    MakeRoundedRectangle::new(
        Vector2::new(board.width, board.length),
        board.corner_radius,
        config.segments(),
    )
    .execute()?
    .translate(Vector3::new(0.0, config.envelope().board_offset_y, 0.0))
}

fn mounting_holes(config: &ResolvedConfig, plate: Solid) -> Result<Solid> {
    let hole = MakeCircle::new(config.board().mount_hole_radius, config.segments()).execute()?;
    hole_centers(config).iter().try_fold(plate, |acc, c| {
        acc.subtract(&hole.translate(Vector3::new(c.x, c.y, 0.0))?)
    })
}

fn thickness(config: &ResolvedConfig, profile: Solid) -> Result<Solid> {
    profile
        .extrude(config.board().thickness)?
        .translate(Vector3::new(0.0, 0.0, config.envelope().board_z))
}
