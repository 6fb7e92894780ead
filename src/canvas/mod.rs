pub mod colors;
pub mod layout;
pub mod waveform_renderer;
