use std::fmt;

use tracing::{info, warn};

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::math::Vector3;
use crate::operations::creation::MakeCuboid;
use crate::solid::{Color, Solid};

/// Edge of the cube emitted when every part is hidden.
const PLACEHOLDER_SIZE: f64 = 2.0;

/// Which physical part a solid represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Board,
    Base,
    Cover,
    /// Stand-in emitted when nothing is visible.
    Placeholder,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Board => "board",
            Self::Base => "base",
            Self::Cover => "cover",
            Self::Placeholder => "placeholder",
        };
        f.write_str(name)
    }
}

/// One emitted solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub kind: PartKind,
    pub solid: Solid,
}

/// Builds the visible parts of the enclosure, in board, base, cover order.
pub struct Assembly<'a> {
    config: &'a ResolvedConfig,
}

impl<'a> Assembly<'a> {
    /// Creates a new `Assembly` over a resolved configuration.
    #[must_use]
    pub fn new(config: &'a ResolvedConfig) -> Self {
        Self { config }
    }

    /// Executes the assembly.
    ///
    /// Hidden parts are not built at all. If every part is hidden a single
    /// small cube is returned so the output is never empty.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while building a part.
    pub fn execute(&self) -> Result<Vec<Part>> {
        let show = self.config.case().show;
        let builders: [(bool, PartKind, fn(&ResolvedConfig) -> Result<Solid>); 3] = [
            (show.board, PartKind::Board, super::board::generate),
            (show.base, PartKind::Base, super::base::generate),
            (show.cover, PartKind::Cover, super::cover::generate),
        ];

        let mut parts = Vec::new();
        for (visible, kind, build) in builders {
            if !visible {
                continue;
            }
            let solid = build(self.config)?;
            info!(part = %kind, "built part");
            parts.push(Part { kind, solid });
        }

        if parts.is_empty() {
            warn!("no parts visible, emitting placeholder");
            parts.push(Part {
                kind: PartKind::Placeholder,
                solid: placeholder()?,
            });
        }
        Ok(parts)
    }
}

fn placeholder() -> Result<Solid> {
    Ok(MakeCuboid::new(Vector3::repeat(PLACEHOLDER_SIZE))
        .execute()?
        .colorize(Color::LIGHT_GRAY))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::config::{BoardSpec, CaseSpec, ConfigurationResolver, CoverFeatures, Visibility};
    use crate::parts::{base, cover};

    fn resolve(case: CaseSpec) -> ResolvedConfig {
        ConfigurationResolver::new(BoardSpec::default(), case)
            .resolve()
            .unwrap()
    }

    fn kinds(parts: &[Part]) -> Vec<PartKind> {
        parts.iter().map(|p| p.kind).collect()
    }

    #[test]
    fn default_assembly_has_three_parts() {
        let config = resolve(CaseSpec::default());
        let parts = Assembly::new(&config).execute().unwrap();
        assert_eq!(kinds(&parts), [PartKind::Board, PartKind::Base, PartKind::Cover]);
        let colors: Vec<_> = parts.iter().map(|p| p.solid.color()).collect();
        assert_eq!(
            colors,
            [
                Some(Color::GOLDENROD),
                Some(Color::INDIAN_RED),
                Some(Color::FOREST_GREEN)
            ]
        );
    }

    #[test]
    fn hidden_parts_are_skipped() {
        let config = resolve(CaseSpec {
            show: Visibility {
                board: false,
                base: true,
                cover: false,
            },
            ..CaseSpec::default()
        });
        let parts = Assembly::new(&config).execute().unwrap();
        assert_eq!(kinds(&parts), [PartKind::Base]);
    }

    #[test]
    fn nothing_visible_yields_placeholder() {
        let config = resolve(CaseSpec {
            show: Visibility {
                board: false,
                base: false,
                cover: false,
            },
            ..CaseSpec::default()
        });
        let parts = Assembly::new(&config).execute().unwrap();
        assert_eq!(kinds(&parts), [PartKind::Placeholder]);
        let b = parts[0].solid.bounding_box().unwrap();
        assert_abs_diff_eq!(b.min.x, -1.0);
        assert_abs_diff_eq!(b.max.z, 1.0);
    }

    #[test]
    fn assembly_is_deterministic() {
        let config = resolve(CaseSpec::default());
        let first = Assembly::new(&config).execute().unwrap();
        let second = Assembly::new(&config).execute().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cover_fits_over_tray_for_every_toggle_combination() {
        for bits in 0..64_u8 {
            for rim_gap in [0.0, 1.0, 2.0, 3.0] {
                let features = CoverFeatures {
                    dim_slot: bits & 1 != 0,
                    leds: bits & 2 != 0,
                    network: bits & 4 != 0,
                    usb_bank1: bits & 8 != 0,
                    usb_bank2: bits & 16 != 0,
                    usb_lip: bits & 32 != 0,
                };
                let case = CaseSpec {
                    features,
                    rim_gap,
                    ..CaseSpec::default()
                };
                let clearance = case.cover_clearance;
                let config = resolve(case);

                let tray = base::outer_shell(&config).unwrap().bounding_box().unwrap();
                let cavity = cover::cavity_envelope(&config).unwrap().bounding_box().unwrap();
                assert_abs_diff_eq!(cavity.min.x, tray.min.x - clearance, epsilon = 1e-9);
                assert_abs_diff_eq!(cavity.max.x, tray.max.x + clearance, epsilon = 1e-9);
                assert_abs_diff_eq!(cavity.min.y, tray.min.y - clearance, epsilon = 1e-9);
                assert_abs_diff_eq!(cavity.max.y, tray.max.y + clearance, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn clip_halves_line_up() {
        let config = resolve(CaseSpec::default());
        let parts = Assembly::new(&config).execute().unwrap();
        let cover = &parts[2].solid;
        let base = &parts[1].solid;
        for clip in config.envelope().clip_positions() {
            // the ball sits where the tray wall has its socket
            assert!(cover.contains(&clip));
            let socket = Vector3::new(-clip.x.signum() * 0.5, 0.0, -1.25);
            assert!(!base.contains(&(clip + socket)));
        }
    }
}
