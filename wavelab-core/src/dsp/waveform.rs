use crate::config::SignalConfig;
use crate::types::{Signal, WaveformKind};
use std::f64::consts::PI;

/// `n = round(duration * sample_rate)` evenly spaced instants from 0 to
/// `duration` inclusive. A single sample sits at t = 0.
pub fn time_axis(duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = (duration * sample_rate).round() as usize;
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = duration / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// Evaluate a waveform at each instant of `time`.
pub fn generate(kind: WaveformKind, time: &[f64], frequency: f64, amplitude: f64) -> Vec<f64> {
    let omega = 2.0 * PI * frequency;
    match kind {
        WaveformKind::Sine => time.iter().map(|&t| amplitude * (omega * t).sin()).collect(),
        WaveformKind::Square => time
            .iter()
            .map(|&t| amplitude * sign((omega * t).sin()))
            .collect(),
        WaveformKind::Sawtooth => time
            .iter()
            .map(|&t| {
                // Ramp from -A at phase 0 up to +A just before 2π.
                let phase = (omega * t).rem_euclid(2.0 * PI);
                amplitude * (phase / PI - 1.0)
            })
            .collect(),
    }
}

/// Like `f64::signum`, but zero maps to zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Signal {
    /// Synthesize `kind` on the time grid described by `config`.
    pub fn generate(kind: WaveformKind, config: &SignalConfig) -> Self {
        let time = time_axis(config.duration, config.sample_rate);
        Self::on_axis(kind, &time, config)
    }

    /// Synthesize `kind` on an existing time grid.
    pub fn on_axis(kind: WaveformKind, time: &[f64], config: &SignalConfig) -> Self {
        Self {
            samples: generate(kind, time, config.frequency, config.amplitude),
            sample_rate: config.sample_rate,
            duration: config.duration,
            amplitude: config.amplitude,
            frequency: config.frequency,
            kind,
        }
    }
}
