use wavelab_core::WaveformKind;

pub const BLUE: [u8; 3] = [31, 119, 180];
pub const RED: [u8; 3] = [214, 39, 40];
pub const GREEN: [u8; 3] = [44, 160, 44];
pub const BLACK: [u8; 3] = [20, 20, 20];

/// Trace colour for each waveform kind (sine blue, square red, sawtooth green).
pub fn waveform_color(kind: WaveformKind) -> [u8; 3] {
    match kind {
        WaveformKind::Sine => BLUE,
        WaveformKind::Square => RED,
        WaveformKind::Sawtooth => GREEN,
    }
}

/// Colour of a filtered trace; always green so it stands out from the
/// dashed clean reference drawn in the waveform's own colour.
pub fn filtered_color() -> [u8; 3] {
    GREEN
}

/// Scale an opacity in 0.0–1.0 to an alpha byte.
pub fn alpha_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}
