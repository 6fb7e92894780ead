//! Error types for signal generation and analysis

use std::io;
use thiserror::Error;

/// Result type for wavelab operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    #[error("duration must be positive and finite, got {0} s")]
    InvalidDuration(f64),

    #[error("frequency must be finite and non-negative, got {0} Hz")]
    InvalidFrequency(f64),

    #[error("amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),

    #[error("noise level must be finite and non-negative, got {0}")]
    InvalidNoiseLevel(f64),

    /// Moving-average window of zero samples
    #[error("filter window must be at least 1 sample, got {0}")]
    InvalidWindow(usize),

    #[error("filter window of {window} samples exceeds signal length {len}")]
    WindowTooLarge { window: usize, len: usize },

    #[error("{duration} s at {sample_rate} Hz produces no samples")]
    TooFewSamples { duration: f64, sample_rate: f64 },

    #[error("{duration} s at {sample_rate} Hz exceeds the limit of {max} samples")]
    TooManySamples { duration: f64, sample_rate: f64, max: usize },

    #[error("signal contains no samples")]
    EmptySignal,

    #[error("FFT failed: {0}")]
    Fft(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
