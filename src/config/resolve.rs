use std::fmt;

use tracing::warn;

use crate::error::{ConfigurationError, Result};
use crate::math::TOLERANCE;
use crate::operations::creation::MIN_SEGMENTS;
use crate::parts::vent::VentSpec;

use super::{BoardEnvelope, BoardSpec, CaseSpec};

/// Upper bound on the circle resolution.
pub const MAX_SEGMENTS: u32 = 1024;

/// An input the resolver adjusted instead of rejecting.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    Clamped {
        field: &'static str,
        requested: f64,
        applied: f64,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamped {
                field,
                requested,
                applied,
            } => write!(f, "{field} = {requested} clamped to {applied}"),
        }
    }
}

/// Board and case parameters merged and checked, ready for the generators.
///
/// Only [`ConfigurationResolver::resolve`] builds one, so every generator
/// can rely on the derived dimensions being consistent and positive.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    board: BoardSpec,
    case: CaseSpec,
    segments: u32,
    rim_gap: f64,
    rim_support: f64,
    envelope: BoardEnvelope,
    warnings: Vec<ConfigWarning>,
}

impl ResolvedConfig {
    #[must_use]
    pub fn board(&self) -> &BoardSpec {
        &self.board
    }

    /// The case parameters as given; use the accessors on this type for
    /// the fields the resolver adjusts.
    #[must_use]
    pub fn case(&self) -> &CaseSpec {
        &self.case
    }

    /// Circle resolution, at least three.
    #[must_use]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Rim ventilation slit height, never negative.
    #[must_use]
    pub fn rim_gap(&self) -> f64 {
        self.rim_gap
    }

    /// Rim support shelf depth; zero when the rim vent is disabled.
    #[must_use]
    pub fn rim_support(&self) -> f64 {
        self.rim_support
    }

    #[must_use]
    pub fn envelope(&self) -> &BoardEnvelope {
        &self.envelope
    }

    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

/// Merges a [`BoardSpec`] with a [`CaseSpec`] into a [`ResolvedConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigurationResolver {
    board: BoardSpec,
    case: CaseSpec,
}

impl ConfigurationResolver {
    /// Creates a new resolver.
    #[must_use]
    pub fn new(board: BoardSpec, case: CaseSpec) -> Self {
        Self { board, case }
    }

    /// Resolves the configuration.
    ///
    /// The circle resolution is clamped to `[3, 1024]` and a negative rim gap
    /// to zero; both are reported as warnings. Everything that affects fit
    /// is checked instead and rejected when out of bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming the first offending field.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let case = &self.case;
        let mut warnings = Vec::new();

        if let Some(&(field, _)) = case.numeric_fields().iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigurationError::NotFinite { field }.into());
        }

        let segments = clamp_segments(case.segments, &mut warnings);
        let rim_gap = if case.rim_gap < 0.0 {
            clamped(&mut warnings, "rim_gap", case.rim_gap, 0.0)
        } else {
            case.rim_gap
        };
        let rim_support = if rim_gap > 0.0 { case.rim_support } else { 0.0 };

        check_case(case, rim_gap)?;

        let envelope = BoardEnvelope::derive(&self.board, case, rim_gap, rim_support);
        let config = ResolvedConfig {
            board: self.board,
            case: case.clone(),
            segments,
            rim_gap,
            rim_support,
            envelope,
            warnings,
        };
        check_envelope(&config)?;
        check_cutouts(&config)?;
        Ok(config)
    }
}

fn clamped(
    warnings: &mut Vec<ConfigWarning>,
    field: &'static str,
    requested: f64,
    applied: f64,
) -> f64 {
    warn!(field, requested, applied, "parameter clamped");
    warnings.push(ConfigWarning::Clamped {
        field,
        requested,
        applied,
    });
    applied
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_segments(requested: i64, warnings: &mut Vec<ConfigWarning>) -> u32 {
    let applied = requested.clamp(i64::from(MIN_SEGMENTS), i64::from(MAX_SEGMENTS));
    if applied != requested {
        clamped(warnings, "segments", requested as f64, applied as f64);
    }
    applied as u32
}

fn positive(field: &'static str, value: f64) -> std::result::Result<(), ConfigurationError> {
    if value > TOLERANCE {
        Ok(())
    } else {
        Err(ConfigurationError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> std::result::Result<(), ConfigurationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: f64::INFINITY,
        })
    }
}

fn within(
    feature: &'static str,
    extent: f64,
    limit: f64,
) -> std::result::Result<(), ConfigurationError> {
    if extent <= limit + TOLERANCE {
        Ok(())
    } else {
        Err(ConfigurationError::CutoutOutsideFootprint {
            feature,
            extent,
            limit,
        })
    }
}

fn check_case(case: &CaseSpec, rim_gap: f64) -> std::result::Result<(), ConfigurationError> {
    positive("base_wall", case.base_wall)?;
    positive("base_floor", case.base_floor)?;
    positive("base_height", case.base_height)?;
    non_negative("base_clearance", case.base_clearance)?;
    positive("vent_hole_radius", case.vent_hole_radius)?;
    non_negative("vent_gap", case.vent_gap)?;
    positive("cover_wall", case.cover_wall)?;
    positive("cover_top", case.cover_top)?;
    positive("cover_height", case.cover_height)?;
    non_negative("cover_clearance", case.cover_clearance)?;
    positive("led_hole_radius", case.led_hole_radius)?;
    positive("clip_radius", case.clip_radius)?;
    non_negative("clip_offset", case.clip_offset)?;
    positive("usb_fin_width", case.usb_fin_width)?;
    non_negative("usb_fin_gap", case.usb_fin_gap)?;
    if rim_gap > 0.0 {
        positive("rim_gap", rim_gap)?;
        positive("rim_support", case.rim_support)?;
        positive("rim_bridge_width", case.rim_bridge_width)?;
    }
    Ok(())
}

fn check_envelope(config: &ResolvedConfig) -> std::result::Result<(), ConfigurationError> {
    let e = config.envelope();
    positive("base cavity width", e.base_cavity.half_width)?;
    positive("base cavity length", e.base_cavity.half_length)?;
    positive("base cavity corner radius", e.base_cavity.corner_radius)?;
    let case = config.case();
    positive(
        "hold-down height",
        e.cover_cavity_height + case.cover_top - e.board_top_z - case.cover_clearance,
    )?;
    if let Some(rim) = &e.rim_vent {
        positive("rim vent segment length", rim.band_half_length)?;
        let inner = &e.cover_inner;
        positive(
            "rim support opening",
            inner.half_width.min(inner.half_length) - rim.support - inner.corner_radius,
        )?;
        non_negative("rim vent strip offset", rim.strip_center_x - rim.strip_half_width)?;
    }
    Ok(())
}

fn check_cutouts(config: &ResolvedConfig) -> std::result::Result<(), ConfigurationError> {
    let board = config.board();
    let case = config.case();
    let e = config.envelope();
    let cf = case.cover_clearance;

    // tray
    let cavity = &e.base_cavity;
    let (field_x, field_y) = VentSpec::from_config(config).half_extent();
    within("vent field width", field_x, cavity.half_width - cavity.corner_radius)?;
    within("vent field length", field_y, cavity.half_length - cavity.corner_radius)?;
    within("storage slot depth", board.sd_slot_depth, e.base_height - case.base_floor)?;
    within("storage slot width", board.sd_slot_width / 2.0, e.base_cavity.half_width)?;

    // cover ends and long side
    let inner_x = e.cover_inner.half_width;
    let led_x = -board.half_width() + board.led_offset;
    for x in [led_x, led_x + board.led_spacing] {
        within("led holes", x.abs() + case.led_hole_radius, inner_x)?;
    }
    within("storage slot width", board.sd_slot_width / 2.0, inner_x)?;
    let network_x = board.half_width() - board.network_offset;
    within("network window", network_x.abs() + board.network_width / 2.0 - cf, inner_x)?;
    let banks = [
        ("usb bank 1", board.usb_bank1_offset),
        ("usb bank 2", board.usb_bank2_offset),
    ];
    for (feature, offset) in banks {
        let x = board.half_width() - offset;
        within(feature, x.abs() + board.usb_width / 2.0 - cf, inner_x)?;
        let fin = x + board.usb_width / 2.0 + case.usb_fin_gap + case.usb_fin_width;
        within("usb support fin", fin.abs(), inner_x)?;
    }

    let inner_y = e.cover_inner.half_length;
    let ports = [
        ("audio slot", board.audio_offset, board.audio_diameter),
        ("hdmi slot", board.hdmi_offset, board.hdmi_width),
        ("power slot", board.power_offset, board.power_width),
    ];
    for (feature, offset, size) in ports {
        let y = e.port_y(board, offset);
        within(feature, y.abs() + size / 2.0 + cf * 2.0, inner_y - e.cover_inner.corner_radius)?;
    }

    // windows above the board must stay below the rim vent shelf
    let ceiling = e
        .rim_vent
        .map_or(e.cover_cavity_height, |rim| rim.support_z);
    let window_base = e.board_top_z + cf;
    within("usb window height", window_base + board.usb_height - cf * 2.0, ceiling)?;
    within("network window height", window_base + board.network_height - cf * 2.0, ceiling)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::EnclosureError;

    fn resolve(case: CaseSpec) -> Result<ResolvedConfig> {
        ConfigurationResolver::new(BoardSpec::default(), case).resolve()
    }

    fn config_error(result: Result<ResolvedConfig>) -> ConfigurationError {
        match result {
            Err(EnclosureError::Configuration(e)) => e,
            other => panic!("expected a configuration error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_resolve_cleanly() {
        let config = ConfigurationResolver::default().resolve().unwrap();
        assert!(config.warnings().is_empty());
        assert_eq!(config.segments(), 36);
        assert_abs_diff_eq!(config.rim_gap(), 2.0);
        assert_abs_diff_eq!(config.rim_support(), 1.5);
    }

    #[test]
    fn low_segment_count_is_clamped_with_warning() {
        let config = resolve(CaseSpec {
            segments: -4,
            ..CaseSpec::default()
        })
        .unwrap();
        assert_eq!(config.segments(), 3);
        assert_eq!(
            config.warnings(),
            &[ConfigWarning::Clamped {
                field: "segments",
                requested: -4.0,
                applied: 3.0,
            }]
        );
    }

    #[test]
    fn high_segment_count_is_clamped_with_warning() {
        let config = resolve(CaseSpec {
            segments: 5000,
            ..CaseSpec::default()
        })
        .unwrap();
        assert_eq!(config.segments(), MAX_SEGMENTS);
        assert_eq!(
            config.warnings(),
            &[ConfigWarning::Clamped {
                field: "segments",
                requested: 5000.0,
                applied: 1024.0,
            }]
        );
    }

    #[test]
    fn vanishing_rim_gap_is_rejected() {
        let err = config_error(resolve(CaseSpec {
            rim_gap: 1e-11,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::NonPositive {
                field: "rim_gap",
                ..
            }
        ));
    }

    #[test]
    fn negative_rim_gap_is_clamped_and_drops_support() {
        let config = resolve(CaseSpec {
            rim_gap: -1.0,
            ..CaseSpec::default()
        })
        .unwrap();
        assert_abs_diff_eq!(config.rim_gap(), 0.0);
        assert_abs_diff_eq!(config.rim_support(), 0.0);
        assert!(config.envelope().rim_vent.is_none());
        assert_eq!(config.warnings().len(), 1);
        assert!(config.warnings()[0].to_string().contains("rim_gap"));
    }

    #[test]
    fn thick_wall_collapses_cavity_corner() {
        let err = config_error(resolve(CaseSpec {
            base_wall: 3.0,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::NonPositive {
                field: "base cavity corner radius",
                ..
            }
        ));
    }

    #[test]
    fn zero_tray_height_is_rejected() {
        let err = config_error(resolve(CaseSpec {
            base_height: 0.0,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::NonPositive {
                field: "base_height",
                ..
            }
        ));
    }

    #[test]
    fn negative_clearance_is_not_clamped() {
        let err = config_error(resolve(CaseSpec {
            cover_clearance: -0.1,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::OutOfRange {
                field: "cover_clearance",
                ..
            }
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let err = config_error(resolve(CaseSpec {
            vent_gap: f64::NAN,
            ..CaseSpec::default()
        }));
        assert!(matches!(err, ConfigurationError::NotFinite { field: "vent_gap" }));
    }

    #[test]
    fn oversized_vent_field_is_rejected() {
        let err = config_error(resolve(CaseSpec {
            vent_count: 14,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::CutoutOutsideFootprint {
                feature: "vent field length",
                ..
            }
        ));
    }

    #[test]
    fn huge_vent_count_is_rejected_without_layout() {
        let err = config_error(resolve(CaseSpec {
            vent_count: u32::MAX,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::CutoutOutsideFootprint {
                feature: "vent field length",
                ..
            }
        ));
    }

    #[test]
    fn wide_rim_bridges_leave_no_segment() {
        let err = config_error(resolve(CaseSpec {
            rim_bridge_width: 30.0,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::NonPositive {
                field: "rim vent segment length",
                ..
            }
        ));
    }

    #[test]
    fn wide_rim_bridges_are_ignored_without_rim_vent() {
        let config = resolve(CaseSpec {
            rim_gap: 0.0,
            rim_bridge_width: 30.0,
            ..CaseSpec::default()
        })
        .unwrap();
        assert!(config.envelope().rim_vent.is_none());
    }

    #[test]
    fn short_cover_cannot_hold_usb_window() {
        let err = config_error(resolve(CaseSpec {
            cover_height: 15.0,
            ..CaseSpec::default()
        }));
        assert!(matches!(
            err,
            ConfigurationError::CutoutOutsideFootprint {
                feature: "usb window height",
                ..
            }
        ));
    }

    #[test]
    fn deep_storage_slot_is_rejected() {
        let board = BoardSpec {
            sd_slot_depth: 5.0,
            ..BoardSpec::default()
        };
        let err = config_error(ConfigurationResolver::new(board, CaseSpec::default()).resolve());
        assert!(matches!(
            err,
            ConfigurationError::CutoutOutsideFootprint {
                feature: "storage slot depth",
                ..
            }
        ));
    }

    fn rejected_field(err: &ConfigurationError) -> &'static str {
        match err {
            ConfigurationError::NonPositive { field, .. }
            | ConfigurationError::OutOfRange { field, .. }
            | ConfigurationError::NotFinite { field } => *field,
            ConfigurationError::CutoutOutsideFootprint { feature, .. } => *feature,
            ConfigurationError::Parse(e) => panic!("unexpected parse error: {e}"),
        }
    }

    #[test]
    fn each_fit_check_rejects_its_feature() {
        let board = BoardSpec::default;
        let case = CaseSpec::default;
        let table = [
            (
                "rim support opening",
                board(),
                CaseSpec {
                    rim_support: 30.0,
                    ..case()
                },
            ),
            (
                "hold-down height",
                board(),
                CaseSpec {
                    cover_height: 1.0,
                    ..case()
                },
            ),
            (
                "storage slot width",
                BoardSpec {
                    sd_slot_width: 60.0,
                    ..board()
                },
                case(),
            ),
            (
                "led holes",
                BoardSpec {
                    led_offset: 0.0,
                    ..board()
                },
                case(),
            ),
            (
                "network window",
                BoardSpec {
                    network_offset: 0.0,
                    ..board()
                },
                case(),
            ),
            (
                "usb bank 1",
                BoardSpec {
                    usb_bank1_offset: 50.0,
                    ..board()
                },
                case(),
            ),
            (
                "usb bank 2",
                BoardSpec {
                    usb_bank2_offset: 55.0,
                    ..board()
                },
                case(),
            ),
            (
                "usb support fin",
                board(),
                CaseSpec {
                    usb_fin_gap: 25.0,
                    ..case()
                },
            ),
            (
                "audio slot",
                BoardSpec {
                    audio_offset: 90.0,
                    ..board()
                },
                case(),
            ),
            (
                "hdmi slot",
                BoardSpec {
                    hdmi_offset: 80.0,
                    ..board()
                },
                case(),
            ),
            (
                "power slot",
                BoardSpec {
                    power_offset: 1.0,
                    ..board()
                },
                case(),
            ),
        ];
        for (expected, board, case) in table {
            let err = config_error(ConfigurationResolver::new(board, case).resolve());
            assert_eq!(rejected_field(&err), expected, "{err}");
        }
    }
}
