pub mod fft;
pub mod filter;
pub mod noise;
pub mod stats;
pub mod waveform;
