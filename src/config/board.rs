/// Fixed dimensions of the target board, in millimetres.
///
/// Port offsets along the long edge (`*_offset` for audio, HDMI and power)
/// are measured from the board's back end (`-Y`). USB bank and network
/// offsets are measured across the board from its right edge (`+X`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardSpec {
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    /// Corner radius used for the outline; slightly under the real board's.
    pub corner_radius: f64,

    /// Radius of the M2.5 mounting holes.
    pub mount_hole_radius: f64,
    /// Radius of the spacer bosses around the mounting holes.
    pub mount_boss_radius: f64,
    /// Inset of the first mounting hole from the back-left corner.
    pub mount_inset_x: f64,
    pub mount_inset_y: f64,
    /// Spacing of the mounting-hole grid.
    pub mount_pitch_x: f64,
    pub mount_pitch_y: f64,

    /// Storage-card slot on the back end.
    pub sd_slot_width: f64,
    pub sd_slot_depth: f64,

    /// How far the USB and network jacks stick out past the front end.
    pub usb_overhang: f64,
    pub usb_height: f64,
    pub usb_width: f64,
    pub usb_bank1_offset: f64,
    pub usb_bank2_offset: f64,
    /// Side of the square block supporting the middle of the USB stack.
    pub usb_support_block: f64,

    pub audio_diameter: f64,
    pub audio_offset: f64,

    pub hdmi_width: f64,
    pub hdmi_offset: f64,
    pub hdmi_height: f64,

    pub power_width: f64,
    pub power_offset: f64,
    pub power_height: f64,

    pub network_width: f64,
    pub network_offset: f64,
    pub network_height: f64,

    /// Status LEDs on the back end, measured from the left edge.
    pub led_offset: f64,
    pub led_spacing: f64,
    /// LED centre height above the board's top face.
    pub led_height: f64,
}

impl BoardSpec {
    /// Raspberry Pi 2 model B.
    pub const RASPBERRY_PI_2: Self = Self {
        length: 85.0,
        width: 56.0,
        thickness: 1.35,
        corner_radius: 2.5,
        mount_hole_radius: 2.75 / 2.0,
        mount_boss_radius: 6.2 / 2.0,
        mount_inset_x: 3.5,
        mount_inset_y: 3.5,
        mount_pitch_x: 49.0,
        mount_pitch_y: 58.0,
        sd_slot_width: 14.0,
        sd_slot_depth: 2.0,
        usb_overhang: 2.0,
        usb_height: 16.0,
        usb_width: 15.0,
        usb_bank1_offset: 29.0,
        usb_bank2_offset: 47.0,
        usb_support_block: 6.0,
        audio_diameter: 6.0,
        audio_offset: 53.5,
        hdmi_width: 15.0,
        hdmi_offset: 32.0,
        hdmi_height: 6.0,
        power_width: 8.0,
        power_offset: 10.6,
        power_height: 3.0,
        network_width: 16.0,
        network_offset: 10.25,
        network_height: 13.5,
        led_offset: 8.0,
        led_spacing: 3.5,
        led_height: 0.5,
    };

    /// Half of the board width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the board length.
    #[must_use]
    pub fn half_length(&self) -> f64 {
        self.length / 2.0
    }
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self::RASPBERRY_PI_2
    }
}
