use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Which parts the assembly should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub board: bool,
    pub base: bool,
    pub cover: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            board: true,
            base: true,
            cover: true,
        }
    }
}

/// Optional cover features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CoverFeatures {
    /// Open the storage-card slot at the back end.
    pub dim_slot: bool,
    /// Drill the two status-LED holes.
    pub leds: bool,
    pub network: bool,
    pub usb_bank1: bool,
    pub usb_bank2: bool,
    /// Reinforcing lip under the USB bank.
    pub usb_lip: bool,
}

impl Default for CoverFeatures {
    fn default() -> Self {
        Self {
            dim_slot: true,
            leds: true,
            network: true,
            usb_bank1: true,
            usb_bank2: true,
            usb_lip: true,
        }
    }
}

/// User-tunable case parameters, in millimetres.
///
/// Every field has a default, so a parameter set only needs to name the
/// values it changes. `segments` and `rim_gap` are raw inputs that the
/// resolver clamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseSpec {
    pub base_wall: f64,
    pub base_floor: f64,
    /// Tray height above the floor.
    pub base_height: f64,
    /// Slack between the board edge and the tray wall.
    pub base_clearance: f64,

    pub vent_hole_radius: f64,
    pub vent_gap: f64,
    /// Holes in the middle column.
    pub vent_count: u32,
    /// Column budget; columns are added in mirrored pairs.
    pub vent_rows: u32,

    pub cover_wall: f64,
    pub cover_top: f64,
    /// Cover height below the top plate.
    pub cover_height: f64,
    /// Slack between the tray's outer wall and the cover's inner wall.
    pub cover_clearance: f64,
    pub led_hole_radius: f64,

    /// Height of the ventilation slit around the cover rim; 0 disables it.
    pub rim_gap: f64,
    /// Depth of the shelf carrying the lid across the slit.
    pub rim_support: f64,
    pub rim_bridge_width: f64,

    pub clip_radius: f64,
    /// Height of the clip centre above the clip radius.
    pub clip_offset: f64,

    pub usb_fin_width: f64,
    pub usb_fin_gap: f64,

    /// Facets approximating a full circle.
    pub segments: i64,

    pub show: Visibility,
    pub features: CoverFeatures,
}

impl Default for CaseSpec {
    fn default() -> Self {
        Self {
            base_wall: 1.0,
            base_floor: 1.5,
            base_height: 3.0,
            base_clearance: 0.25,
            vent_hole_radius: 2.0,
            vent_gap: 4.0,
            vent_count: 7,
            vent_rows: 5,
            cover_wall: 2.0,
            cover_top: 1.5,
            cover_height: 23.0,
            cover_clearance: 0.25,
            led_hole_radius: 2.5 / 2.0,
            rim_gap: 2.0,
            rim_support: 1.5,
            rim_bridge_width: 5.0,
            clip_radius: 2.5 / 2.0,
            clip_offset: 1.0,
            usb_fin_width: 1.0,
            usb_fin_gap: 1.0,
            segments: 36,
            show: Visibility::default(),
            features: CoverFeatures::default(),
        }
    }
}

impl CaseSpec {
    /// Parses a JSON parameter set; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] if the JSON is malformed or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Named numeric fields, for validation.
    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 20] {
        [
            ("base_wall", self.base_wall),
            ("base_floor", self.base_floor),
            ("base_height", self.base_height),
            ("base_clearance", self.base_clearance),
            ("vent_hole_radius", self.vent_hole_radius),
            ("vent_gap", self.vent_gap),
            ("cover_wall", self.cover_wall),
            ("cover_top", self.cover_top),
            ("cover_height", self.cover_height),
            ("cover_clearance", self.cover_clearance),
            ("led_hole_radius", self.led_hole_radius),
            ("rim_gap", self.rim_gap),
            ("rim_support", self.rim_support),
            ("rim_bridge_width", self.rim_bridge_width),
            ("clip_radius", self.clip_radius),
            ("clip_offset", self.clip_offset),
            ("usb_fin_width", self.usb_fin_width),
            ("usb_fin_gap", self.usb_fin_gap),
            ("vent_count", f64::from(self.vent_count)),
            ("vent_rows", f64::from(self.vent_rows)),
        ]
    }
}
