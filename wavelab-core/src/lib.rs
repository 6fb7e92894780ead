//! Test-signal synthesis and analysis.
//!
//! The pipeline is linear: generate a waveform, add Gaussian noise, smooth it
//! with a moving average, then measure spectrum, SNR and summary statistics.
//! [`pipeline::Analysis::run`] performs the whole chain for all three
//! waveform kinds.

pub mod config;
pub mod dsp;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::SignalConfig;
pub use dsp::filter::{EdgePolicy, MovingAverage};
pub use dsp::noise::NoiseInjector;
pub use error::{Error, Result};
pub use pipeline::Analysis;
pub use types::{FilteredSignal, NoisySignal, Signal, SignalStats, SpectralProfile, WaveformKind, WaveformSet};
